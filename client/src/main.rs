//! Cartel CLI - talk to the exhibition API from a terminal
//!
//! # Artist Commands
//!
//! ```bash
//! cartel register --nom Durand --prenom Alice ...   # Create an artist account
//! cartel login alice@example.com                    # Store a session
//! cartel artworks submit --nom "Torse" ...          # Submit one artwork
//! cartel dossier submit dossier.json                # Submit a full dossier
//! ```
//!
//! # Admin Commands
//!
//! ```bash
//! cartel artworks list --selected                   # Browse submissions
//! cartel selection save --add 3 --remove 7          # Update the selection
//! cartel catalog -o catalogue.pdf                   # Export the catalog
//! cartel artists --search durand --page 2           # Browse artists
//! ```

use cartel::curation::{ArtistListIntent, ArtistListState, CurationIntent, CurationState, PageSize, Tab};
use cartel::guard::{check_route, guard_admin_user, GuardDecision, Route};
use cartel::submission::{
    landing_route, ArtistDossier, ArtworkSubmission, FilePart, LoginForm, RegistrationForm,
    MSG_DOSSIER_FAILED, MSG_DOSSIER_SENT, MSG_REGISTERED, MSG_REGISTER_FAILED,
};
use cartel::{
    ApiClient, ArtistType, Artwork, ArtworkType, CliError, Config, FileBackend,
    SessionStore, CATALOG_FILE_NAME,
};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

type Client = ApiClient<FileBackend>;

#[derive(Parser)]
#[command(name = "cartel")]
#[command(about = "Submit and curate artworks for the exhibition", long_about = None)]
struct Cli {
    /// API base URL (overrides CARTEL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file (overrides CARTEL_SESSION_FILE)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        email: String,

        /// Password (read from stdin if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Create an artist account
    Register {
        #[arg(long)]
        nom: String,
        #[arg(long)]
        prenom: String,
        #[arg(long)]
        nom_artiste: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        /// Peintre, Photographe, Numérique or Sculpteur
        #[arg(long)]
        type_artiste: String,
        #[arg(long, default_value = "")]
        telephone: String,
        #[arg(long, default_value = "")]
        adresse: String,
    },

    /// Browse and submit artworks
    Artworks {
        #[command(subcommand)]
        action: ArtworkAction,
    },

    /// Submit an artist dossier
    Dossier {
        #[command(subcommand)]
        action: DossierAction,
    },

    /// Vote for an artwork
    Vote { id: u32 },

    /// Show or update the exhibition selection (admin)
    Selection {
        #[command(subcommand)]
        action: SelectionAction,
    },

    /// Download the catalog PDF of the selection (admin)
    Catalog {
        /// Output file
        #[arg(short, long, default_value = CATALOG_FILE_NAME)]
        output: PathBuf,
    },

    /// Download an artist summary PDF (admin)
    ArtistSummary {
        id: u32,

        /// Output file (default: artiste_<id>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered artists (admin)
    Artists {
        /// Filter on artist name, last name or first name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 5, 10 or 25
        #[arg(long, default_value = "10")]
        page_size: usize,
    },
}

#[derive(Subcommand)]
enum ArtworkAction {
    /// List artworks
    List {
        /// Filter on title, artist name or type
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only selected artworks
        #[arg(long)]
        selected: bool,

        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one artwork
    Show { id: u32 },

    /// Submit one artwork
    Submit {
        #[arg(long)]
        nom: String,
        #[arg(long)]
        prix: String,
        /// Peinture, Photo, Numérique or Sculpture
        #[arg(long = "type")]
        type_oeuvre: String,
        #[arg(long, default_value = "")]
        technique: String,
        /// Image file
        #[arg(long)]
        photo: PathBuf,
        /// Dimension as key=value, e.g. dimension_hauteur=120
        #[arg(long = "dim")]
        dimensions: Vec<String>,
    },

    /// Print the image URL of an artwork
    ImageUrl { id: u32 },
}

#[derive(Subcommand)]
enum DossierAction {
    /// Submit a dossier described by a JSON manifest
    Submit { manifest: PathBuf },
}

#[derive(Subcommand)]
enum SelectionAction {
    /// List selected artworks
    Show,

    /// Add and remove ids, then save the whole selection
    Save {
        #[arg(long, num_args = 1..)]
        add: Vec<u32>,
        #[arg(long, num_args = 1..)]
        remove: Vec<u32>,
    },
}

/// Dossier manifest: the dossier fields plus photo paths keyed by slot
/// number (1-based), relative to the manifest.
#[derive(Deserialize)]
struct DossierManifest {
    #[serde(flatten)]
    dossier: ArtistDossier,
    #[serde(default)]
    photos: BTreeMap<usize, PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match build_client(cli.api_url, cli.session_file) {
        Ok(client) => run(&client, cli.command).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        if let CliError::Api(api) = &e {
            if api.is_unauthorized() {
                eprintln!("   Session cleared. Run 'cartel login <email>' again.");
            }
        }
        std::process::exit(1);
    }
}

fn build_client(api_url: Option<String>, session_file: Option<PathBuf>) -> Result<Client, CliError> {
    let config = Config::from_env()?.with_overrides(api_url, session_file)?;
    log::debug!("API: {} | session: {}", config.api_url, config.session_file.display());
    let store = SessionStore::new(FileBackend::new(&config.session_file));
    Ok(ApiClient::new(config.api_url, store))
}

async fn run(client: &Client, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Login { email, password } => cmd_login(client, email, password).await,
        Commands::Logout => cmd_logout(client),
        Commands::Whoami => cmd_whoami(client),
        Commands::Register {
            nom,
            prenom,
            nom_artiste,
            email,
            password,
            confirm_password,
            type_artiste,
            telephone,
            adresse,
        } => {
            let form = RegistrationForm {
                nom,
                prenom,
                nom_artiste,
                email,
                password,
                confirm_password,
                telephone,
                adresse,
                type_artiste: Some(type_artiste.parse::<ArtistType>()?),
            };
            cmd_register(client, &form).await
        }
        Commands::Artworks { action } => cmd_artworks(client, action).await,
        Commands::Dossier {
            action: DossierAction::Submit { manifest },
        } => cmd_dossier(client, &manifest).await,
        Commands::Vote { id } => cmd_vote(client, id).await,
        Commands::Selection { action } => cmd_selection(client, action).await,
        Commands::Catalog { output } => cmd_catalog(client, &output).await,
        Commands::ArtistSummary { id, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(format!("artiste_{}.pdf", id)));
            cmd_artist_summary(client, id, &output).await
        }
        Commands::Artists {
            search,
            page,
            page_size,
        } => cmd_artists(client, search, page, page_size).await,
    }
}

// =============================================================================
// Session
// =============================================================================

async fn cmd_login(client: &Client, email: String, password: Option<String>) -> Result<(), CliError> {
    let password = match password {
        Some(p) => p,
        None => prompt("Mot de passe: ")?,
    };
    let credentials = LoginForm { email, password }.credentials()?;

    eprintln!("🔑 Logging in as {}", credentials.email);
    let session = client.login(&credentials).await?;
    eprintln!("✅ Logged in: {} ({})", session.user.username, session.user.email);
    if session.user.is_admin {
        eprintln!("   Admin access granted");
    }
    eprintln!("   Landing page: {}", landing_route(&session.user).path());
    Ok(())
}

fn cmd_logout(client: &Client) -> Result<(), CliError> {
    client.logout()?;
    eprintln!("👋 Logged out");
    Ok(())
}

fn cmd_whoami(client: &Client) -> Result<(), CliError> {
    match client.current_session()? {
        Some(session) => {
            println!("{} <{}>", session.user.username, session.user.email);
            println!("id: {}", session.user.id);
            println!("admin: {}", session.user.is_admin);
        }
        None => eprintln!("📋 Not logged in."),
    }
    Ok(())
}

async fn cmd_register(client: &Client, form: &RegistrationForm) -> Result<(), CliError> {
    let artist = form.validate()?;
    eprintln!("📝 Registering {} ({})", artist.nom_artiste, artist.email);

    match client.register_artist(&artist).await {
        Ok(created) => {
            eprintln!("✅ {}", MSG_REGISTERED);
            eprintln!("   Artist id: {}", created.id);
            eprintln!("   Next: {}", RegistrationForm::next_route());
            Ok(())
        }
        Err(e) => Err(CliError::Usage(e.user_message(MSG_REGISTER_FAILED))),
    }
}

// =============================================================================
// Artworks
// =============================================================================

async fn cmd_artworks(client: &Client, action: ArtworkAction) -> Result<(), CliError> {
    match action {
        ArtworkAction::List {
            search,
            selected,
            json,
        } => {
            let mut state = CurationState::new();
            state.load(client.fetch_artworks().await?);
            state.apply(CurationIntent::Search(search));
            if selected {
                state.apply(CurationIntent::SwitchTab(Tab::Selected));
            }

            let visible = state.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
                return Ok(());
            }

            eprintln!("🖼️  {} artworks ({} shown)", state.artworks().len(), visible.len());
            for artwork in visible {
                print_artwork_row(artwork, state.is_selected(artwork.id));
            }
        }

        ArtworkAction::Show { id } => {
            let artwork = client.fetch_artwork(id).await?;
            print_artwork_details(&artwork, &client.image_url(id));
        }

        ArtworkAction::Submit {
            nom,
            prix,
            type_oeuvre,
            technique,
            photo,
            dimensions,
        } => {
            let mut form = ArtworkSubmission {
                nom,
                prix,
                technique,
                type_oeuvre: Some(type_oeuvre.parse::<ArtworkType>()?),
                photo: Some(read_photo(&photo)?),
                ..ArtworkSubmission::default()
            };
            for dim in &dimensions {
                let (key, value) = dim
                    .split_once('=')
                    .ok_or_else(|| CliError::Usage(format!("Expected key=value, got '{}'", dim)))?;
                if !form.set_dimension(key.trim(), value.trim()) {
                    return Err(CliError::Usage(format!("Unknown dimension: {}", key)));
                }
            }

            require_token(client, Route::SubmitArtwork)?;
            let payload = form.to_payload()?;
            eprintln!("📤 Submitting '{}'", form.nom);
            client.submit_artwork(&payload).await?;
            eprintln!("✅ {}", cartel::submission::MSG_ARTWORK_SENT);
        }

        ArtworkAction::ImageUrl { id } => println!("{}", client.image_url(id)),
    }
    Ok(())
}

async fn cmd_vote(client: &Client, id: u32) -> Result<(), CliError> {
    let receipt = client.vote(id).await?;
    match receipt.votes {
        Some(votes) => eprintln!("👍 Vote recorded ({} votes)", votes),
        None => eprintln!("👍 {}", receipt.message.as_deref().unwrap_or("Vote recorded")),
    }
    Ok(())
}

async fn cmd_dossier(client: &Client, manifest_path: &Path) -> Result<(), CliError> {
    eprintln!("📄 Reading dossier: {}", manifest_path.display());
    let content = fs::read_to_string(manifest_path)?;
    let DossierManifest {
        mut dossier,
        photos,
    } = serde_json::from_str(&content)?;
    dossier.normalize_slots();

    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    for (slot, path) in photos {
        if slot == 0 {
            return Err(CliError::Usage("Photo slots start at 1".to_string()));
        }
        let photo = read_photo(&base_dir.join(path))?;
        dossier.set_entry_photo(slot - 1, Some(photo))?;
    }

    let payload = dossier.to_payload();
    eprintln!("   {} artworks, {} photos", dossier.filled_entries(), payload.files().len());

    match client.submit_dossier(&payload).await {
        Ok(_) => {
            eprintln!("✅ {}", MSG_DOSSIER_SENT);
            Ok(())
        }
        Err(e) => Err(CliError::Usage(e.user_message(MSG_DOSSIER_FAILED))),
    }
}

// =============================================================================
// Curation
// =============================================================================

async fn cmd_selection(client: &Client, action: SelectionAction) -> Result<(), CliError> {
    require_admin(client)?;

    let mut state = CurationState::new();
    load_artworks(client, &mut state).await?;

    match action {
        SelectionAction::Show => {
            state.apply(CurationIntent::SwitchTab(Tab::Selected));
            eprintln!("⭐ {}", state.selected_tab_label());
            for artwork in state.visible() {
                print_artwork_row(artwork, true);
            }
        }

        SelectionAction::Save { add, remove } => {
            for id in add {
                state.apply(CurationIntent::SetSelected(id, true));
            }
            for id in remove {
                state.apply(CurationIntent::SetSelected(id, false));
            }
            if !state.can_save() {
                return Err(CliError::Usage("The selection is empty".to_string()));
            }

            let ids = state.selection_ids();
            eprintln!("💾 Saving {} artworks: {:?}", ids.len(), ids);
            if let Err(e) = client.finalize_selection(&ids).await {
                if !e.is_unauthorized() {
                    state.selection_save_failed();
                    report(&state);
                }
                return Err(e.into());
            }
            state.selection_saved();
            report(&state);
            load_artworks(client, &mut state).await?;
            eprintln!("   {}", state.selected_tab_label());
        }
    }
    Ok(())
}

async fn cmd_catalog(client: &Client, output: &Path) -> Result<(), CliError> {
    require_admin(client)?;

    let mut state = CurationState::new();
    load_artworks(client, &mut state).await?;
    if !state.can_export() {
        return Err(CliError::Usage("The selection is empty".to_string()));
    }

    eprintln!("📚 Generating catalog for {} artworks", state.selection_ids().len());
    match client.generate_catalog().await {
        Ok(pdf) => {
            fs::write(output, &pdf)?;
            state.catalog_ready();
            report(&state);
            eprintln!("💾 Saved to: {} ({} bytes)", output.display(), pdf.len());
            Ok(())
        }
        Err(e) => {
            state.catalog_failed();
            report(&state);
            Err(e.into())
        }
    }
}

async fn cmd_artist_summary(client: &Client, id: u32, output: &Path) -> Result<(), CliError> {
    require_admin(client)?;
    eprintln!("📄 Generating summary for artist {}", id);
    let pdf = client.generate_artist_summary(id).await?;
    fs::write(output, &pdf)?;
    eprintln!("💾 Saved to: {} ({} bytes)", output.display(), pdf.len());
    Ok(())
}

async fn cmd_artists(client: &Client, search: String, page: usize, page_size: usize) -> Result<(), CliError> {
    require_token(client, Route::AdminArtists)?;

    let size = PageSize::from_usize(page_size)
        .ok_or_else(|| CliError::Usage(format!("Page size must be 5, 10 or 25, got {}", page_size)))?;

    let mut state = ArtistListState::new();
    match client.fetch_artists().await {
        Ok(artists) => state.load(artists),
        Err(e) if e.is_unauthorized() => return Err(e.into()),
        Err(e) => state.load_failed(&e),
    }
    state.apply(ArtistListIntent::SetPageSize(size));
    state.apply(ArtistListIntent::Search(search));
    state.apply(ArtistListIntent::SetPage(page.saturating_sub(1)));

    eprintln!("👩‍🎨 Artists {}", state.page_label());
    for artist in state.page_rows() {
        println!(
            "{:>4}  {:<24} {:<28} {:<28} {}",
            artist.id,
            artist.nom_artiste,
            artist.full_name(),
            artist.email,
            artist.type_artiste.map(|t| t.label()).unwrap_or("-")
        );
    }
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

async fn load_artworks(client: &Client, state: &mut CurationState) -> Result<(), CliError> {
    match client.fetch_artworks().await {
        Ok(artworks) => {
            state.load(artworks);
            Ok(())
        }
        Err(e) => {
            state.load_failed();
            report(state);
            Err(e.into())
        }
    }
}

fn report(state: &CurationState) {
    if let Some(note) = state.notification() {
        match note.severity {
            cartel::Severity::Success => eprintln!("✅ {}", note.message),
            cartel::Severity::Error => eprintln!("❌ {}", note.message),
        }
    }
}

fn require_token(client: &Client, route: Route) -> Result<(), CliError> {
    match check_route(route, client.session()) {
        GuardDecision::Allow => Ok(()),
        GuardDecision::Redirect(to) => Err(CliError::Usage(format!(
            "Not logged in (would redirect to {}). Run 'cartel login <email>' first.",
            to
        ))),
    }
}

fn require_admin(client: &Client) -> Result<(), CliError> {
    require_token(client, Route::Admin)?;
    if guard_admin_user(client.session()) != GuardDecision::Allow {
        return Err(CliError::Usage("Admin access required".to_string()));
    }
    Ok(())
}

fn read_photo(path: &Path) -> Result<FilePart, CliError> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo")
        .to_string();
    Ok(FilePart::from_name(name, bytes))
}

fn prompt(label: &str) -> Result<String, CliError> {
    eprint!("{}", label);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_artwork_row(artwork: &Artwork, selected: bool) {
    println!(
        "{} {:>4}  {:<32} {:<24} {:<10} {:>10}  {} votes",
        if selected { "★" } else { " " },
        artwork.id,
        artwork.nom,
        artwork.artist.nom_artiste,
        artwork.type_oeuvre.as_str(),
        artwork.price_label(),
        artwork.votes
    );
}

fn print_artwork_details(artwork: &Artwork, image_url: &str) {
    println!("🖼️  {} ({})", artwork.nom, artwork.type_oeuvre.label());
    println!("Artiste: {} ({})", artwork.artist.nom_artiste, artwork.artist.full_name());
    println!("Technique: {}", artwork.technique);
    println!("Prix: {}", artwork.price_label());
    for line in artwork.dimensions.describe() {
        println!("{}", line);
    }
    if let Some(date) = artwork.submitted_on() {
        println!("Soumis le: {}", date.format("%d/%m/%Y"));
    }
    println!("Votes: {}", artwork.votes);
    println!("Statut: {}", artwork.status_label());
    println!("Image: {}", image_url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use cartel::{Session, User};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn artwork_json(id: u32, selected: bool) -> Value {
        json!({
            "id": id,
            "nom": format!("Oeuvre {}", id),
            "prix": 120.0,
            "selectionne": selected,
            "type_oeuvre": "Peinture",
            "artist": { "id": 4, "nom": "Martin", "prenom": "Paul", "nom_artiste": "P.M." }
        })
    }

    /// Serves two artworks and counts list fetches. `/selection/finalize`
    /// answers with `finalize_status`.
    async fn spawn_server(finalize_status: StatusCode) -> (String, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let counter = fetches.clone();
        let app = Router::new()
            .route(
                "/api/artworks",
                get(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Json(json!([artwork_json(1, true), artwork_json(2, false)]))
                    }
                }),
            )
            .route(
                "/api/selection/finalize",
                post(move || async move {
                    if finalize_status.is_success() {
                        Json(json!({ "message": "ok" })).into_response()
                    } else {
                        (finalize_status, Json(json!({ "error": "base indisponible" }))).into_response()
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/api", addr), fetches)
    }

    fn admin_client(base: String, dir: &TempDir) -> Client {
        let store = SessionStore::new(FileBackend::new(dir.path().join("session.json")));
        store
            .save(&Session {
                token: "tok-admin".into(),
                user: User {
                    id: 1,
                    username: "admin".into(),
                    email: "admin@artcartel.com".into(),
                    is_admin: true,
                },
            })
            .unwrap();
        ApiClient::new(base, store)
    }

    fn save(add: Vec<u32>) -> SelectionAction {
        SelectionAction::Save { add, remove: vec![] }
    }

    #[tokio::test]
    async fn test_selection_save_failure_is_an_error() {
        let (base, fetches) = spawn_server(StatusCode::INTERNAL_SERVER_ERROR).await;
        let dir = TempDir::new().unwrap();
        let client = admin_client(base, &dir);

        let result = cmd_selection(&client, save(vec![2])).await;
        assert!(matches!(
            result,
            Err(CliError::Api(cartel::ApiError::Server { status: 500, .. }))
        ));
        // Initial load only: a failed save does not resync from the server.
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(client.session().token().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_selection_save_reloads_after_success() {
        let (base, fetches) = spawn_server(StatusCode::OK).await;
        let dir = TempDir::new().unwrap();
        let client = admin_client(base, &dir);

        cmd_selection(&client, save(vec![2])).await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }
}
