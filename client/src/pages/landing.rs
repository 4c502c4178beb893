//! Public landing page with the product blurb and calls to action.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "70% Time Reduction",
        description: "From 2+ hours to 30 minutes per project",
        icon: "🕒",
    },
    Feature {
        title: "Visual Workflow Builder",
        description: "Drag screenshots into navigable workflow maps",
        icon: "⚡",
    },
    Feature {
        title: "Professional PDFs",
        description: "Generate comprehensive requirements documents",
        icon: "📄",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1 class="landing-page__title">"ScreenFlow Capture"</h1>
                <p class="landing-page__lead">
                    "Screenshot-driven workflow documentation that takes healthcare EMR "
                    "migration write-ups from 2+ hours to 30 minutes. Built for Legacy "
                    "Data Access project managers working with Epic, Cerner, and "
                    "athenahealth."
                </p>
                <a class="btn btn--primary landing-page__cta" href="/dashboard">
                    "Start New Project"
                </a>
            </section>
            <section class="landing-page__features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="landing-page__feature">
                                <span class="landing-page__feature-icon" aria-hidden="true">
                                    {feature.icon}
                                </span>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
            <section class="landing-page__cta-block">
                <h2>"Ready to Transform Your Workflow Documentation?"</h2>
                <p>"Join the Legacy Data Access PMs saving hours on every project."</p>
                <a class="btn btn--primary" href="/register">
                    "Get Started Now →"
                </a>
            </section>
        </div>
    }
}
