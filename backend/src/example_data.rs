//! Development seed catalogue.
//!
//! Loads a small fixed dataset through the driving ports, so seeding runs
//! the same validation and orchestration as API traffic. Enabled via
//! `QUADRA_SEED_EXAMPLE_DATA` at startup.

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::district::{DistrictDraft, DistrictId};
use crate::domain::property::PropertyDraft;
use crate::domain::room::RoomDraft;
use crate::domain::{Error, PropertyId};
use crate::inbound::http::state::HttpState;

const DISTRICTS: [(&str, i64); 3] = [
    ("Bela Vista", 8537),
    ("Pinheiros", 10_900),
    ("Itacorubi", 7411),
];

// (property name, index into DISTRICTS)
const PROPERTIES: [(&str, usize); 4] = [
    ("Bem Viver", 0),
    ("Vila Toscana", 1),
    ("Jardim Imperiale", 2),
    ("Bela Vista", 2),
];

// (room name, width, length, index into PROPERTIES)
const ROOMS: [(&str, f64, f64, usize); 6] = [
    ("Quarto", 10.0, 5.0, 0),
    ("Cozinha", 15.0, 8.0, 0),
    ("Banheiro", 2.0, 3.0, 1),
    ("Sala de Estar", 10.0, 5.0, 1),
    ("Sala de Jantar", 12.0, 3.0, 2),
    ("Porão", 15.0, 5.0, 2),
];

/// Insert the example catalogue through the driving ports.
///
/// # Errors
///
/// Propagates the first [`Error`] raised by a service; the dataset is static
/// and valid, so in practice only adapter failures surface.
pub async fn seed_example_catalog(state: &HttpState) -> Result<(), Error> {
    let mut district_ids: Vec<DistrictId> = Vec::with_capacity(DISTRICTS.len());
    for (name, rate) in DISTRICTS {
        let draft = DistrictDraft::new(Some(name.to_owned()), Some(Decimal::from(rate)))?;
        let district = state.districts.create_district(draft).await?;
        district_ids.push(district.id);
    }

    let mut property_ids: Vec<PropertyId> = Vec::with_capacity(PROPERTIES.len());
    for (name, district_index) in PROPERTIES {
        let district_id = district_ids
            .get(district_index)
            .copied()
            .ok_or_else(|| Error::internal("seed property references an unseeded district"))?;
        let draft = PropertyDraft::new(Some(name.to_owned()), Some(district_id))?;
        let property = state.properties.create_property(draft).await?;
        property_ids.push(property.id);
    }

    for (name, width, length, property_index) in ROOMS {
        let property_id = property_ids
            .get(property_index)
            .copied()
            .ok_or_else(|| Error::internal("seed room references an unseeded property"))?;
        let draft = RoomDraft::new(Some(name.to_owned()), Some(width), Some(length))?;
        state.rooms.create_room(property_id, draft).await?;
    }

    info!(
        districts = DISTRICTS.len(),
        properties = PROPERTIES.len(),
        rooms = ROOMS.len(),
        "example catalogue seeded"
    );
    Ok(())
}
