//! Home page panels: the booking journey and live listing figures

use leptos::*;
use std::collections::BTreeSet;
use tutor_widgets::TutorProfile;

use crate::listing::Listing;

/// One stage of finding and booking a tutor
#[component]
pub fn JourneyStep(
    step: u8,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <li class="relative bg-white rounded-xl shadow-sm p-6 pt-10">
            <span class="absolute -top-5 left-6 w-10 h-10 bg-indigo-600 text-white rounded-full flex items-center justify-center font-bold">
                {step}
            </span>
            <i data-feather=icon class="w-6 h-6 text-indigo-500 mb-3"></i>
            <h3 class="text-lg font-semibold text-gray-900 mb-1">{title}</h3>
            <p class="text-gray-600 text-sm">{description}</p>
        </li>
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingStat {
    pub value: String,
    pub label: &'static str,
}

/// Figures derived from the tutors currently listed
pub fn listing_stats(listing: &Listing) -> Vec<ListingStat> {
    let profiles: Vec<TutorProfile> = listing
        .tutors()
        .iter()
        .map(TutorProfile::from_attributes)
        .collect();

    let rated: Vec<f64> = profiles.iter().map(|p| p.rating).filter(|r| *r > 0.0).collect();
    let average = if rated.is_empty() {
        "-".to_string()
    } else {
        format!("{:.1}", rated.iter().sum::<f64>() / rated.len() as f64)
    };

    vec![
        ListingStat { value: profiles.len().to_string(), label: "Tutors listed" },
        ListingStat { value: count_distinct(&profiles, |p| p.subject.as_str()).to_string(), label: "Subjects" },
        ListingStat { value: count_distinct(&profiles, |p| p.city.as_str()).to_string(), label: "Cities" },
        ListingStat { value: average, label: "Average rating" },
    ]
}

fn count_distinct(profiles: &[TutorProfile], field: fn(&TutorProfile) -> &str) -> usize {
    profiles
        .iter()
        .map(field)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

#[component]
pub fn StatStrip(stats: Vec<ListingStat>) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
            {stats
                .into_iter()
                .map(|stat| view! {
                    <div class="flex flex-col-reverse">
                        <dt class="text-gray-600 mt-1">{stat.label}</dt>
                        <dd class="text-4xl font-bold text-indigo-600">{stat.value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}
