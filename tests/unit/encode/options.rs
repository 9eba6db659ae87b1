use super::*;

#[test]
fn mp4_preset_matches_expected_arguments() {
    assert_eq!(
        mp4_output_args(8),
        [
            "-profile:v",
            "main",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-crf",
            "8"
        ]
    );
    assert_eq!(EncodeOptions::default().output_args, mp4_output_args(DEFAULT_CRF));
}

#[test]
fn webm_preset_uses_vp9_constant_quality() {
    let args = EncodeOptions::webm(31).output_args;
    assert!(args.windows(2).any(|w| w == ["-c:v", "libvpx-vp9"]));
    assert!(args.windows(2).any(|w| w == ["-crf", "31"]));
    assert!(args.ends_with(&["-b:v".to_owned(), "0".to_owned()]));
}

#[test]
fn loglevel_parses_names_and_numbers() {
    assert_eq!("warning".parse::<Loglevel>().unwrap(), Loglevel::Warning);
    assert_eq!("DEBUG".parse::<Loglevel>().unwrap(), Loglevel::Debug);
    assert_eq!("24".parse::<Loglevel>().unwrap(), Loglevel::Level(24));
    assert!("loud".parse::<Loglevel>().is_err());

    assert_eq!(Loglevel::Error.to_string(), "error");
    assert_eq!(Loglevel::Level(-8).to_string(), "-8");
}

#[test]
fn loglevel_converts_from_owned_strings() {
    assert_eq!(Loglevel::try_from(String::from("info")).unwrap(), Loglevel::Info);
    assert!(matches!(
        Loglevel::try_from(String::from("shout")),
        Err(TurntableError::Validation(_))
    ));
    assert_eq!(String::from(Loglevel::Trace), "trace");
}

#[test]
fn partial_json_fills_defaults() {
    let json = r#"{"loglevel": "quiet", "vflip": false, "output_args": ["-c:v", "ffv1"]}"#;
    let opts = EncodeOptions::from_json(json).unwrap();
    assert_eq!(opts.loglevel, Loglevel::Quiet);
    assert_eq!(opts.vflip, Some(false));
    assert_eq!(opts.output_args, ["-c:v", "ffv1"]);
    assert_eq!(opts.pix_fmt, "rgb24");
    assert_eq!(opts.ffmpeg_executable, PathBuf::from("ffmpeg"));
}

#[test]
fn validation_rejects_non_rgb24_layouts() {
    let err = EncodeOptions::new().with_pix_fmt("rgba").validate().unwrap_err();
    assert!(matches!(err, TurntableError::Validation(_)));
    assert!(EncodeOptions::new().with_pix_fmt("bgr24").validate().is_ok());

    let err = EncodeOptions::from_json(r#"{"pix_fmt": "yuv420p"}"#).unwrap_err();
    assert!(matches!(err, TurntableError::Validation(_)));
}

#[test]
fn builders_override_fields() {
    let opts = EncodeOptions::webm(20)
        .with_output_args(["-c:v", "libx265"])
        .with_ffmpeg_executable("/opt/ffmpeg/bin/ffmpeg")
        .with_loglevel(Loglevel::Info)
        .with_vflip(true);
    assert_eq!(opts.output_args, ["-c:v", "libx265"]);
    assert_eq!(opts.ffmpeg_executable, PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
    assert_eq!(opts.loglevel, Loglevel::Info);
    assert_eq!(opts.vflip, Some(true));
}
