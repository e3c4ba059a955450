use ixxat_rs::{
    bitrate_to_timing, classify, classify_all, constant::*, BitrateProfile, BusState,
    Classification, ClassifyError, ErrorReason, Facility, FrameRecord, InfoReason, Severity,
    StatusCode,
};

#[test]
fn test_status_fields() {
    for _ in 0..10_000 {
        let raw: u32 = rand::random();
        let code = StatusCode::decode(raw);
        assert_eq!(code.status() as u32, raw & STATUS_MASK);
        assert_eq!(code.severity().bits(), raw & SEV_MASK);
        assert_eq!(code.facility().bits(), raw & FACILITY_MASK);
        assert_eq!(code.is_customer(), raw & CUSTOMER_FLAG != 0);
        assert_eq!(code.is_reserved(), raw & RESERVED_FLAG != 0);
        assert_eq!(code.to_bits(), raw);
        assert_eq!(StatusCode::decode(raw), code);
    }
}

#[test]
fn test_status_samples() {
    assert_eq!(StatusCode::decode(0x0000_0000).severity(), Severity::Success);

    let code = StatusCode::from(0xC001_0004);
    assert_eq!(code.severity(), Severity::Error);
    assert_eq!(code.facility(), Facility::Vci);
    assert_eq!(code.status(), 4);

    let code = StatusCode::decode(VCI_E_ALREADY_INITIALIZED);
    assert_eq!(code.status(), 0x11);
    assert_eq!(StatusCode::decode(SEV_CCL_INFO).severity(), Severity::Info);
    assert_eq!(StatusCode::decode(SEV_DAL_WARN).facility(), Facility::Dal);
}

#[test]
fn test_bus_state_bits() {
    for raw in 0..=u8::MAX {
        let state = BusState::decode(raw);
        assert_eq!(state.tx_pending, raw & CAN_STATUS_TXPEND != 0);
        assert_eq!(state.overrun, raw & CAN_STATUS_OVRRUN != 0);
        assert_eq!(state.error_limit_reached, raw & CAN_STATUS_ERRLIM != 0);
        assert_eq!(state.bus_off, raw & CAN_STATUS_BUSOFF != 0);
        assert_eq!(state.initializing, raw & CAN_STATUS_ININIT != 0);
        assert_eq!(state.bus_coupling_error, raw & CAN_STATUS_BUSCERR != 0);
        assert_eq!(state.raw(), raw & 0x3F);
    }
}

#[test]
fn test_classify() -> anyhow::Result<()> {
    let data = hex::decode("0102030405060708")?;
    let record = FrameRecord::new(CAN_MSGTYPE_DATA, &data)?;
    match classify(&record)? {
        Classification::Data(payload) => assert_eq!(payload.to_vec(), data),
        v => panic!("Invalid classification: {:?}", v),
    }

    let record = FrameRecord::new(CAN_MSGTYPE_INFO, &hex::decode("01")?)?;
    assert_eq!(classify(&record)?, Classification::Info(InfoReason::Start));
    let record = FrameRecord::new(CAN_MSGTYPE_INFO, &hex::decode("03")?)?;
    assert_eq!(classify(&record)?, Classification::Info(InfoReason::Reset));

    let record = FrameRecord::new(CAN_MSGTYPE_ERROR, &hex::decode("04")?)?;
    assert_eq!(classify(&record)?, Classification::Error(ErrorReason::Bit));

    let record = FrameRecord::new(CAN_MSGTYPE_STATUS, &hex::decode("0c")?)?;
    match classify(&record)? {
        Classification::Status(state) => {
            assert!(state.bus_off);
            assert!(state.error_limit_reached);
            assert!(!state.is_operational());
        },
        v => panic!("Invalid classification: {:?}", v),
    }

    Ok(())
}

#[test]
fn test_classify_rejects() -> anyhow::Result<()> {
    let record = FrameRecord::new(CAN_MSGTYPE_INFO, &hex::decode("09")?)?;
    assert_eq!(
        classify(&record),
        Err(ClassifyError::InvalidFrame { message_type: CAN_MSGTYPE_INFO, code: 9 })
    );

    let record = FrameRecord::new(99, &[])?;
    assert_eq!(classify(&record), Err(ClassifyError::UnknownMessageType(99)));

    let record = FrameRecord::new(CAN_MSGTYPE_ERROR, &hex::decode("05")?)?;
    assert_eq!(classify(&record)?, Classification::Error(ErrorReason::Other(5)));

    Ok(())
}

#[test]
fn test_classify_all() -> anyhow::Result<()> {
    let records = vec![
        FrameRecord::new(CAN_MSGTYPE_WAKEUP, &[])?,
        FrameRecord::new(CAN_MSGTYPE_INFO, &[0x00])?,
        FrameRecord::new(42, &[])?,
        FrameRecord::new(CAN_MSGTYPE_INFO, &[CAN_INFO_STOP])?,
    ];

    let frames = classify_all(&records);
    assert_eq!(
        frames,
        vec![Classification::Wakeup, Classification::Info(InfoReason::Stop)]
    );

    Ok(())
}

#[test]
fn test_bitrate_table() {
    assert_eq!(bitrate_to_timing(BitrateProfile::Kbps500), (0x00, 0x1C));
    assert_eq!(bitrate_to_timing(BitrateProfile::Kbps1000), (0x00, 0x14));
    assert_eq!(bitrate_to_timing(BitrateProfile::Kbps20), (CAN_BT0_20KB, CAN_BT1_20KB));
    assert_eq!(bitrate_to_timing(BitrateProfile::Kbps50), (CAN_BT0_50KB, CAN_BT1_50KB));
}
