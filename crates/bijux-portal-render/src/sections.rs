use bijux_portal_model::{humanize, Hotel, Project, Timestamp};

use crate::display::{
    CarpoolRow, ContactRow, ContactsSection, FlightRow, HotelSection, ReservationRow,
    SourceEmailRow, Summary, TravelSection,
};
use crate::labels::{date_label, text_or, time_label, TBD};

const UNTITLED_PROJECT: &str = "Untitled project";
const ADDRESS_TBD: &str = "Address TBD";
const HOTEL_TBD: &str = "Hotel TBD";
const VEHICLE_TBD: &str = "Vehicle TBD";
const RIDERS_TBD: &str = "Riders TBD";

#[must_use]
pub fn summary(project: &Project) -> Summary {
    let title = match (project.title.trim(), project.id.trim()) {
        ("", "") => UNTITLED_PROJECT.to_string(),
        ("", id) => id.to_string(),
        (title, _) => title.to_string(),
    };
    let number = text_or(project.store.number.as_deref(), TBD);
    let store_line = match project.store.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("Store #{number} ({name})"),
        _ => format!("Store #{number}"),
    };
    Summary {
        title,
        store_line,
        address_line: text_or(Some(project.store.address.as_str()), ADDRESS_TBD),
        report_time_label: time_label(project.store.report_time.as_ref()),
    }
}

/// Rows in manifest order; role keys are humanized (`site_lead` → `Site Lead`).
#[must_use]
pub fn contacts(project: &Project) -> ContactsSection {
    if project.contacts.is_empty() {
        return ContactsSection::Empty;
    }
    let rows = project
        .contacts
        .iter()
        .map(|(role, contact)| ContactRow {
            role_label: humanize(role),
            name: text_or(Some(contact.name.as_str()), TBD),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        })
        .collect();
    ContactsSection::Listed(rows)
}

/// Flight legs flattened one row per leg, numbered from 1 per traveler.
#[must_use]
pub fn travel(project: &Project) -> TravelSection {
    let travel = &project.travel;
    let flight_rows = travel
        .flights
        .iter()
        .flat_map(|flight| {
            let traveler = text_or(Some(flight.traveler.as_str()), TBD);
            flight.legs.iter().enumerate().map(move |(i, leg)| FlightRow {
                traveler: traveler.clone(),
                leg_label: format!("Leg {}", i + 1),
                depart_label: endpoint_label(&leg.depart_airport, leg.depart_time.as_ref()),
                arrive_label: endpoint_label(&leg.arrive_airport, leg.arrive_time.as_ref()),
            })
        })
        .collect();
    let carpool_rows = travel
        .carpool
        .iter()
        .map(|entry| CarpoolRow {
            driver: text_or(Some(entry.driver.as_str()), TBD),
            vehicle_label: text_or(entry.vehicle.as_deref(), VEHICLE_TBD),
            riders_label: if entry.riders.is_empty() {
                RIDERS_TBD.to_string()
            } else {
                entry.riders.join(", ")
            },
            arrival_label: time_label(entry.arrival_time.as_ref()),
        })
        .collect();
    TravelSection {
        flight_rows,
        hotel: hotel(travel.hotel.as_ref()),
        carpool_rows,
    }
}

fn endpoint_label(airport: &str, time: Option<&Timestamp>) -> String {
    format!("{} {}", text_or(Some(airport), TBD), time_label(time))
}

fn hotel(hotel: Option<&Hotel>) -> HotelSection {
    let Some(hotel) = hotel else {
        return HotelSection::Pending {
            label: HOTEL_TBD.to_string(),
        };
    };
    HotelSection::Booked {
        name: text_or(Some(hotel.name.as_str()), HOTEL_TBD),
        address_line: text_or(hotel.address.as_deref(), ADDRESS_TBD),
        check_in_label: date_label(hotel.check_in.as_ref()),
        check_out_label: date_label(hotel.check_out.as_ref()),
        reservations: hotel
            .reservations
            .iter()
            .map(|r| ReservationRow {
                guest: text_or(Some(r.guest.as_str()), TBD),
                confirmation: text_or(Some(r.confirmation.as_str()), TBD),
            })
            .collect(),
    }
}

/// Provenance rows for the emails a manifest was built from.
#[must_use]
pub fn source_emails(project: &Project) -> Vec<SourceEmailRow> {
    project
        .source_emails
        .iter()
        .map(|email| SourceEmailRow {
            type_label: match humanize(&email.kind) {
                label if label.is_empty() => "Reference".to_string(),
                label => label,
            },
            path: email.path.clone(),
        })
        .collect()
}
