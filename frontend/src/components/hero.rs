//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Deepfake Detection"</h1>
            <p class="subtitle">
                "Upload an image or video to check whether it has been synthetically generated or manipulated."
            </p>
        </div>
    }
}
