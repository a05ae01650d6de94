//! About section: short bio, process steps, and tools.

use leptos::prelude::*;

const PROCESS: [&str; 4] = ["Review the footage", "Build the story", "Grade and sound", "Deliver everywhere"];

const TOOLS: [&str; 5] = ["Premiere Pro", "DaVinci Resolve", "After Effects", "Final Cut Pro", "Audition"];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about__media">
                <video class="about__video" src="/assets/about.mp4" autoplay=true muted=true playsinline=true></video>
            </div>
            <div class="about__text">
                <h2 class="section-title">"About Me"</h2>
                <p class="about__bio">
                    "I'm Jayed, a video editor who treats every timeline like a script. "
                    "I shape raw footage into pieces with rhythm, emotion and a clear point of view."
                </p>
                <h3 class="about__subtitle">"My Process"</h3>
                <ol class="about__process">
                    {PROCESS.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
                </ol>
                <h3 class="about__subtitle">"Tools I Use"</h3>
                <ul class="about__tools">
                    {TOOLS.iter().map(|tool| view! { <li class="chip">{*tool}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
