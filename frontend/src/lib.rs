//! DeepScan - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for uploading an image or video and showing
//! whether the analysis service considers it authentic or manipulated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (status badge)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadZone                                             │
//! │  ├── PreviewPanel (when a file is selected)                 │
//! │  └── ResultPanel (while analyzing again / after analysis)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All components share one `RwSignal<BrowserWidget>`; the state machine in
//! [`state`] decides what each of them shows.
//!
//! # Modules
//!
//! - [`config`] - Endpoint, limits and colours
//! - [`types`] - Common types (MediaKind, AnalysisResult, ResultView, AppError)
//! - [`state`] - The upload widget state machine
//! - [`components`] - UI components
//! - [`services`] - Network upload and local preview decoding

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Media
    MediaKind,
    // API
    AnalysisResult,
    // Display
    ResultView, Tone,
    // Errors
    AppError, AppResult,
};

// State machine
pub use state::{
    BrowserWidget, SelectedFile, Selection, SelectionId, Ticket, UploadWidget, WidgetError,
    WidgetState,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 DeepScan - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DeepScan - Deepfake Detection"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The one piece of widget state, shared by every component below
    let widget = create_rw_signal(BrowserWidget::new());
    let file_input = create_node_ref::<html::Input>();

    view! {
        <Header widget=widget/>

        <div class="container">
            <Hero/>

            <UploadZone widget=widget file_input=file_input/>

            <Show
                when=move || widget.with(|w| w.preview_visible())
                fallback=|| view! { }
            >
                <PreviewPanel widget=widget file_input=file_input/>
            </Show>

            <Show
                when=move || widget.with(|w| w.result_visible())
                fallback=|| view! { }
            >
                <ResultPanel widget=widget/>
            </Show>
        </div>

        <Footer/>
    }
}
