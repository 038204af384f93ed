//! Footer component

use leptos::*;
use leptos_router::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer>
            <div>"© " {year} " Exposition d'Art • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <A href="/register" class="footer-link">"Espace Artiste"</A>
                <A href="/admin/login" class="footer-link">"Espace Administrateur"</A>
            </div>
        </footer>
    }
}
