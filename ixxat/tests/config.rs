use ixxat_rs::{AcceptanceFilter, ChannelConfig, OperatingMode};
use rs_can::CanError;

#[test]
fn test_from_yaml() -> anyhow::Result<()> {
    let cfg = ChannelConfig::from_yaml(r#"
bitrate: 250000
mode: STANDARD | EXTENDED | ERROR_FRAME
filter:
  code: 0x80000000
  mask: 0xFFFFFFFF
"#)?;

    assert_eq!(cfg.bitrate(), 250_000);
    assert_eq!(
        cfg.mode(),
        OperatingMode::STANDARD | OperatingMode::EXTENDED | OperatingMode::ERROR_FRAME
    );
    assert_eq!(cfg.filter(), AcceptanceFilter::NONE);
    assert_eq!(cfg.timing()?, (0x01, 0x1C));

    Ok(())
}

#[test]
fn test_from_yaml_defaults() -> anyhow::Result<()> {
    let cfg = ChannelConfig::from_yaml("bitrate: 125000")?;
    assert_eq!(cfg.mode(), OperatingMode::STANDARD);
    assert_eq!(cfg.filter(), AcceptanceFilter::ALL);
    assert_eq!(cfg.timing()?, (0x03, 0x1C));

    Ok(())
}

#[test]
fn test_from_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("ixxat-channel.cfg.yaml");
    std::fs::write(&path, "bitrate: 800000\nmode: EXTENDED\n")?;

    let cfg = ChannelConfig::from_file(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(cfg.mode(), OperatingMode::EXTENDED);
    assert_eq!(cfg.timing()?, (0x00, 0x16));

    Ok(())
}

#[test]
fn test_invalid_yaml() {
    let ret = ChannelConfig::from_yaml("bitrate: fast");
    assert!(matches!(ret, Err(CanError::DeviceConfigError(_))));
}
