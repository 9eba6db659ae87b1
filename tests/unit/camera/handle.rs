use super::*;

#[test]
fn parses_signed_and_unsigned_directions() {
    assert_eq!("+y".parse::<UpDirection>().unwrap().to_vec3(), DVec3::Y);
    assert_eq!("-Z".parse::<UpDirection>().unwrap().to_vec3(), DVec3::NEG_Z);
    assert_eq!(" x ".parse::<UpDirection>().unwrap().to_vec3(), DVec3::X);
}

#[test]
fn unset_or_unknown_direction_is_degenerate() {
    assert!(matches!(
        "".parse::<UpDirection>(),
        Err(TurntableError::DegenerateAxis(_))
    ));
    assert!(matches!(
        "+w".parse::<UpDirection>(),
        Err(TurntableError::DegenerateAxis(_))
    ));
}

#[test]
fn display_roundtrips_through_serde() {
    let d: UpDirection = "-x".parse().unwrap();
    assert_eq!(d.to_string(), "-X");
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"-X\"");
    let back: UpDirection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

#[test]
fn default_is_plus_y() {
    assert_eq!(UpDirection::default().to_vec3(), DVec3::Y);
}
