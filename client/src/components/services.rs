//! Production services grid.

use leptos::prelude::*;

struct Service {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Pre-Production Planning",
        icon: "📝",
        description: "Script breakdown, storyboarding, and shot list creation to ensure your vision is perfectly captured",
        features: [
            "Creative concept development",
            "Shooting schedule optimization",
            "Location scouting guidance",
            "Equipment recommendations",
        ],
    },
    Service {
        title: "On-Set Supervision",
        icon: "🎥",
        description: "On-location direction to maintain editorial vision during filming",
        features: [
            "Real-time continuity checks",
            "Performance coaching",
            "Coverage optimization",
            "Technical quality control",
        ],
    },
    Service {
        title: "Post-Production",
        icon: "✂️",
        description: "From assembly cut to final delivery with professional polish",
        features: ["Rough cut to final edit", "Color correction & grading", "Audio sweetening", "Export all formats"],
    },
    Service {
        title: "Final Delivery",
        icon: "🚀",
        description: "Platform-optimized exports with quality assurance",
        features: ["4K/8K mastering", "HDR/SDR versions", "Closed captions", "Platform-specific encoding"],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <h2 class="section-title">"Production Process"</h2>
            <div class="services__grid">
                {SERVICES
                    .iter()
                    .map(|s| {
                        view! {
                            <article class="service-card">
                                <span class="service-card__icon" aria-hidden="true">{s.icon}</span>
                                <h3 class="service-card__title">{s.title}</h3>
                                <p class="service-card__text">{s.description}</p>
                                <ul class="service-card__features">
                                    {s.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
