//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"DeepScan • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-note">
                "Results are produced by an external detection service and are probabilistic."
            </div>
        </footer>
    }
}
