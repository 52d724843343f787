//! Demo binary: runs one auction end to end against the in-memory stores
//! and prints the resulting state as JSON.

use anyhow::Context;
use chrono::{Duration, Utc};

use vams_auctions::{EndAuction, PlaceBid, StartAuction};
use vams_core::{Amount, Entity};
use vams_infra::AuctionHouse;
use vams_vehicles::{AddVehicle, VehicleType};

fn main() -> anyhow::Result<()> {
    vams_observability::init();

    let house = AuctionHouse::in_memory();

    let sedan = house.inventory_commands.add_vehicle(&AddVehicle {
        vehicle_type: VehicleType::Sedan,
        manufacturer: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2020,
        starting_bid: Amount::from(15_000),
        number_of_doors: Some(4),
        number_of_seats: None,
        load_capacity: None,
    })?;
    let suv = house.inventory_commands.add_vehicle(&AddVehicle {
        vehicle_type: VehicleType::Suv,
        manufacturer: "Honda".to_string(),
        model: "CR-V".to_string(),
        year: 2022,
        starting_bid: Amount::from(22_000),
        number_of_doors: None,
        number_of_seats: Some(5),
        load_capacity: None,
    })?;
    house.inventory_commands.add_vehicle(&AddVehicle {
        vehicle_type: VehicleType::Truck,
        manufacturer: "Volvo".to_string(),
        model: "FH16".to_string(),
        year: 2019,
        starting_bid: Amount::from(60_000),
        number_of_doors: None,
        number_of_seats: None,
        load_capacity: Some(980.0),
    })?;

    // Short-lived auction over two of the three vehicles. Commands carry
    // their own timestamps, so the close can be issued without waiting.
    let opened_at = Utc::now();
    let auction = house.auction_commands.start_auction(&StartAuction {
        vehicle_ids: vec![sedan.id(), suv.id()],
        end_date: opened_at + Duration::seconds(1),
        occurred_at: opened_at,
    })?;
    let auction_id = auction.id();

    for amount in [15_000, 15_500, 16_250] {
        house.auction_commands.place_bid(&PlaceBid {
            auction_id,
            vehicle_id: sedan.id(),
            amount: Amount::from(amount),
        })?;
    }

    // No bids on the SUV; closing sells the sedan and releases the SUV.
    let closed = house.auction_commands.end_auction(&EndAuction {
        auction_id,
        occurred_at: opened_at + Duration::seconds(2),
    })?;

    let report = serde_json::json!({
        "auction": closed,
        "inventory": house.vehicle_queries.all_vehicles()?,
        "still_available": house.vehicle_queries.available_vehicles()?,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serializing auction report")?
    );

    Ok(())
}
