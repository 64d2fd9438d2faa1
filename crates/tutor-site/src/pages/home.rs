//! Home page

use leptos::*;
use std::sync::Arc;
use crate::components::*;
use crate::SiteState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<Arc<SiteState>>();
    let featured = state.listing.tutors().to_vec();
    let stats = listing_stats(&state.listing);

    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-indigo-600 via-indigo-500 to-purple-500 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center mb-10">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Find the Perfect Tutor"
                        </h1>
                        <p class="text-xl md:text-2xl text-indigo-100">
                            "Verified professionals for any subject, any level. "
                            "Learn online or in person in your city."
                        </p>
                    </div>
                    <SearchCard/>
                </div>
            </section>

            // Featured Tutors
            <section class="py-20">
                <div class="container mx-auto px-4">
                    <div class="flex items-end justify-between mb-10">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900">"Featured Tutors"</h2>
                        <a href="/tutors" class="text-indigo-600 hover:text-indigo-800 font-medium">"View all →"</a>
                    </div>
                    <TutorGrid tutors=featured/>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "How It Works"
                        </h2>
                    </div>
                    <ol class="grid md:grid-cols-3 gap-8">
                        <JourneyStep
                            step=1
                            icon="search"
                            title="Search"
                            description="Pick a subject and a city to see tutors near you."
                        />
                        <JourneyStep
                            step=2
                            icon="message-circle"
                            title="Contact"
                            description="Send a message to ask about availability and teaching style."
                        />
                        <JourneyStep
                            step=3
                            icon="calendar"
                            title="Book"
                            description="Reserve your first session directly from the tutor's card."
                        />
                    </ol>
                </div>
            </section>

            // Stats
            <section class="py-16 bg-indigo-50">
                <div class="container mx-auto px-4">
                    <StatStrip stats=stats/>
                </div>
            </section>
        </div>
    }
}
