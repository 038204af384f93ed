//! Cartel - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend where artists register and submit artworks and
//! admins curate the exhibition selection. Forms, guards and dashboard
//! state come from the `cartel` crate; this crate adds the DOM, a gloo-net
//! transport and `localStorage` sessions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (session-aware links)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /                 HomePage                              │
//! │  ├── /oeuvre/:id       ArtworkPage                           │
//! │  ├── /inscription      RegisterPage                          │
//! │  ├── /register         DossierForm                           │
//! │  ├── /connexion        LoginPage                             │
//! │  ├── /admin/login      LoginPage                             │
//! │  ├── /soumettre        RouteGate → ArtworkSubmissionPage     │
//! │  ├── /admin            RouteGate → AdminDashboard            │
//! │  └── /admin/artists    RouteGate → ArtistList                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Shared app state and errors
//! - [`components`] - Pages and UI building blocks
//! - [`services`] - HTTP, storage, files, 3D viewer

use cartel::Route as Page;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{use_app_state, AppError, AppResult, AppState};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Cartel - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    let user = match services::session_store().user() {
        Ok(user) => user,
        Err(e) => {
            log::warn!("⚠️ Ignoring stored user: {}", e);
            None
        }
    };
    provide_context(AppState::new(user));
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/oeuvre/:id" view=ArtworkPage/>
                    <Route path="/inscription" view=RegisterPage/>
                    <Route path="/register" view=DossierForm/>
                    <Route path="/connexion" view=LoginPage/>
                    <Route path="/admin/login" view=LoginPage/>
                    <Route
                        path="/soumettre"
                        view=|| view! {
                            <RouteGate route=Page::SubmitArtwork>
                                <ArtworkSubmissionPage/>
                            </RouteGate>
                        }
                    />
                    <Route
                        path="/admin"
                        view=|| view! {
                            <RouteGate route=Page::Admin>
                                <AdminDashboard/>
                            </RouteGate>
                        }
                    />
                    <Route
                        path="/admin/artists"
                        view=|| view! {
                            <RouteGate route=Page::AdminArtists>
                                <ArtistList/>
                            </RouteGate>
                        }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
