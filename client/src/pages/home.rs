//! Public marketing page assembling every section in scroll order.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::easter_egg::EasterEgg;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::showreel::Showreel;
use crate::components::testimonials::Testimonials;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <Hero/>
            <About/>
            <Showreel/>
            <Services/>
            <Testimonials/>
            <Contact/>
            <EasterEgg/>
        </main>
        <Footer/>
    }
}
