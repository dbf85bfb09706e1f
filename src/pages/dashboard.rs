//! Client dashboard: tenant welcome, greeting, and stay overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for clients. The router's guard sends everyone else to
//! `/login`; branding comes from the signed-in client's tenant.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::toolbar::Toolbar;
use crate::state::branding::{Branding, DEFAULT_TENANT_ID, branding_for};
use crate::state::session::SessionState;
use crate::util::time::local_hour;

pub(crate) const PAGE_TITLE: &str = "Client Dashboard";

/// Sample booking shown until the portal is wired to a reservations API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Booking {
    pub property: &'static str,
    pub dates: &'static str,
    pub guests: u8,
    pub confirmed: bool,
}

pub(crate) const UPCOMING_BOOKINGS: [Booking; 2] = [
    Booking { property: "Ocean View Suite", dates: "Dec 15-18", guests: 2, confirmed: true },
    Booking { property: "Mountain Cabin", dates: "Jan 22-25", guests: 4, confirmed: false },
];

pub(crate) fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..12 => "Good morning",
        12..18 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Tenant branding for the dashboard, falling back to the default tenant.
pub(crate) fn dashboard_branding(session: &SessionState) -> Option<&'static Branding> {
    session.branding().or_else(|| branding_for(DEFAULT_TENANT_ID))
}

pub(crate) fn booking_status_label(booking: &Booking) -> &'static str {
    if booking.confirmed { "confirmed" } else { "pending" }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let brand = move || session.with(dashboard_branding);
    let first_name = move || {
        session.with(|s| {
            s.current()
                .and_then(|u| u.full_name.split_whitespace().next().map(str::to_owned))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dashboard-page">
            <Title text=PAGE_TITLE/>
            <Toolbar title=Signal::derive(move || brand().map_or("Hotel Portal", |b| b.display_name).to_owned())/>
            <section class="dashboard-hero">
                <span class="dashboard-hero__logo">{move || brand().map(|b| b.logo)}</span>
                <div>
                    <h1 class="dashboard-hero__title">
                        {move || format!("{}, {}", greeting_for_hour(local_hour()), first_name())}
                    </h1>
                    <p class="dashboard-hero__welcome">{move || brand().map(|b| b.welcome_message)}</p>
                    <p class="dashboard-hero__tagline">{move || brand().map(|b| b.tagline)}</p>
                </div>
            </section>
            <section class="dashboard-bookings">
                <h2>"Upcoming stays"</h2>
                <ul class="dashboard-bookings__list">
                    {UPCOMING_BOOKINGS
                        .iter()
                        .map(|booking| {
                            let status = booking_status_label(booking);
                            view! {
                                <li class="booking-card">
                                    <span class="booking-card__property">{booking.property}</span>
                                    <span class="booking-card__dates">{booking.dates}</span>
                                    <span class="booking-card__guests">{format!("{} guests", booking.guests)}</span>
                                    <span class=format!("booking-card__status booking-card__status--{status}")>
                                        {status}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
