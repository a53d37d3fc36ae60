//! End-to-end: raw bytes in, awaited outcomes out, through the public API.

use deconz_driver::{Driver, RequestError};
use deconz_frame::CommandResult;

fn read_parameter_frame(seq: u8, status: u8, parameter_id: u8, value: &[u8]) -> Vec<u8> {
    let mut buf = vec![0x0A, seq, status];
    buf.extend_from_slice(&((8 + value.len()) as u16).to_le_bytes());
    buf.extend_from_slice(&((1 + value.len()) as u16).to_le_bytes());
    buf.push(parameter_id);
    buf.extend_from_slice(value);
    buf
}

#[tokio::test]
async fn awaited_response_resolves_with_decoded_payload() {
    let mut driver = Driver::new();
    let response = driver.submit(3);

    // The spec'd worked example: ReadParameter, seq 3, success, PAN_ID 0x1234.
    driver.supply_frame(&[0x0A, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x34, 0x12]);

    assert_eq!(response.await, Ok(CommandResult::NetworkPanId(0x1234)));
    assert_eq!(driver.pending(), 0);
}

#[tokio::test]
async fn remote_failure_carries_the_status_byte() {
    let mut driver = Driver::new();
    let response = driver.submit(7);

    driver.supply_frame(&read_parameter_frame(7, 0xE0, 0x02, &[0x00, 0x00]));

    assert_eq!(response.await, Err(RequestError::Remote { status: 0xE0 }));
}

#[tokio::test]
async fn firmware_version_roundtrip() {
    let mut driver = Driver::new();
    let response = driver.submit(0x42);

    driver.supply_frame(&[0x0D, 0x42, 0x00, 0x09, 0x00, 0x05, 0x39, 0x10, 0x26]);

    assert_eq!(
        response.await,
        Ok(CommandResult::FirmwareVersion([0x05, 0x39, 0x10, 0x26]))
    );
}

#[tokio::test]
async fn write_parameter_ack_resolves() {
    let mut driver = Driver::new();
    let response = driver.submit(0x21);

    driver.supply_frame(&[0x0B, 0x21, 0x00, 0x08, 0x00, 0x01, 0x00, 0x05]);

    assert_eq!(response.await, Ok(CommandResult::ParameterWriteAck(0x05)));
}

#[tokio::test]
async fn cancelled_request_fails_even_if_frame_arrives_later() {
    let mut driver = Driver::new();
    let response = driver.submit(8);

    driver.cancel(8);
    driver.supply_frame(&read_parameter_frame(8, 0, 0x02, &[0x34, 0x12]));

    assert_eq!(response.await, Err(RequestError::Cancelled));
}

#[tokio::test]
async fn sequence_number_can_be_reused_after_completion() {
    let mut driver = Driver::new();

    let first = driver.submit(5);
    driver.supply_frame(&read_parameter_frame(5, 0, 0x05, &[11]));
    assert_eq!(first.await, Ok(CommandResult::NetworkChannel(11)));

    let second = driver.submit(5);
    driver.supply_frame(&read_parameter_frame(5, 0, 0x05, &[25]));
    assert_eq!(second.await, Ok(CommandResult::NetworkChannel(25)));
}

#[tokio::test]
async fn driver_drop_closes_waiters() {
    let mut driver = Driver::new();
    let response = driver.submit(1);
    drop(driver);

    assert_eq!(response.await, Err(RequestError::Closed));
}
