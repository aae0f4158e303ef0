//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of rig-can:
//! - Look up message IDs in the registry
//! - Decode incoming frames into readings
//! - Encode readings into frames with a composite identifier
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use rig_can::protocol::lookups::{Destination, Priority, Source};
use rig_can::protocol::messages::{MessageId, Reading};
use rig_can::protocol::registry::{decode, descriptor, encode, lookup};
use rig_can::protocol::transport::can_frame::CanFrame;
use rig_can::protocol::transport::can_id::{CanId, FrameHeader};

fn main() {
    println!("=== rig-can Quickstart ===\n");

    // ======================================================================
    // 1. Browse the message table
    // ======================================================================
    println!("1. Registered messages");

    for id in MessageId::ALL {
        let layout = descriptor(id);
        print!("   {:>2} {:<26} {:<21}", id.value(), id.name(), layout.kind.as_str());
        for field in layout.fields {
            print!(" {}[{}]", field.id, field.unit);
        }
        println!();
    }
    println!("   lookup(99) -> {:?}\n", lookup(99));

    // ======================================================================
    // 2. Decode a frame
    // ======================================================================
    println!("2. Decoding TEMP_SENSOR_1 with payload 01 2C");

    let frame = CanFrame::new(CanId(6), &[0x01, 0x2C]).expect("payload fits");
    match decode(&frame) {
        Ok(reading) => {
            for (field, value) in reading.fields() {
                println!("   {}: {:.1} {}", field.name, value, field.unit);
            }
        }
        Err(e) => eprintln!("   Decode error: {}", e),
    }
    let empty = CanFrame::new(CanId(4), &[]).expect("payload fits");
    println!("   Empty PRESSURE_SENSOR_1 -> {:?}\n", decode(&empty));

    // ======================================================================
    // 3. Encode a reading with a full header
    // ======================================================================
    println!("3. Encoding PRESSURE_SENSOR_2 (pressure + temperature)");

    let reading = Reading::new(MessageId::PressureSensor2, &[84.2, 36.5]).expect("two fields");
    let header = FrameHeader::new(Source::FuelDispense, Destination::Pump2)
        .with_priority(Priority::Realtime);
    match encode(&reading, header) {
        Ok(frame) => {
            println!("   CAN ID: 0x{:08X}", frame.id.0);
            println!("   Priority: {:?}", frame.id.priority());
            println!("   Source: {:?}", frame.id.source());
            println!("   Destination: {:?}", frame.id.destination());
            print!("   Payload: ");
            for byte in frame.payload() {
                print!("{:02X} ", byte);
            }
            println!();
            println!("   Decodes back equal: {}\n", decode(&frame) == Ok(reading));
        }
        Err(e) => eprintln!("   Encode error: {}\n", e),
    }

    // ======================================================================
    // 4. Out-of-range values are refused
    // ======================================================================
    println!("4. Encoding 900 V on VOLTAGE_SENSOR_1");
    let too_high = Reading::new(MessageId::VoltageSensor1, &[900.0]).expect("one field");
    println!("   -> {:?}\n", encode(&too_high, FrameHeader::default()));

    println!("Quickstart complete.");
}
