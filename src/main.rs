//! `hotelctl`, the admin CLI for the hotel management API.
//!
//! One subcommand per entity, one action per screen of the original
//! admin flows: list, get, create, update and delete for hoteles;
//! create (and list) for habitaciones; create for acomodaciones.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hotel_admin::config::{resolve_server, ClientConfig};
use hotel_admin::pages::{
    AcomodacionCreatePage, HabitacionCreatePage, HotelCreatePage, HotelDetailPage, HotelEditPage,
    HotelListPage, PageState,
};
use hotel_admin::{FieldErrors, Habitacion, Hotel, HotelApi, HotelForm, HttpHotelApi};

/// Hotel administration CLI.
#[derive(Parser, Debug)]
#[command(name = "hotelctl", about = "Hotel management admin CLI")]
struct Cli {
    /// Server base URL (overrides environment and config file).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Path to client config file (default: ~/.hotel-admin/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage hoteles.
    Hoteles {
        #[command(subcommand)]
        action: HotelesAction,
    },

    /// Manage habitaciones.
    Habitaciones {
        #[command(subcommand)]
        action: HabitacionesAction,
    },

    /// Manage acomodaciones.
    Acomodaciones {
        #[command(subcommand)]
        action: AcomodacionesAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum HotelesAction {
    /// List all hoteles.
    List,

    /// Show one hotel with its habitaciones and acomodaciones.
    Get { id: i64 },

    /// Create a hotel.
    Create {
        #[arg(long, default_value = "")]
        nombre: String,
        #[arg(long, default_value = "")]
        direccion: String,
        #[arg(long, default_value = "")]
        ciudad: String,
        #[arg(long, default_value = "")]
        nit: String,
        #[arg(long, default_value_t = 0)]
        numero_habitaciones: u32,
    },

    /// Update a hotel (full replacement; omitted flags keep current values).
    Update {
        id: i64,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        direccion: Option<String>,
        #[arg(long)]
        ciudad: Option<String>,
        #[arg(long)]
        nit: Option<String>,
        #[arg(long)]
        numero_habitaciones: Option<u32>,
    },

    /// Delete a hotel.
    Delete {
        id: i64,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum HabitacionesAction {
    /// List all habitaciones with their acomodaciones.
    List,

    /// Create a habitación.
    Create {
        /// Parent hotel.
        #[arg(long)]
        hotel_id: Option<i64>,
        /// Room type (ESTANDAR, JUNIOR or SUITE).
        #[arg(long, default_value = "")]
        tipo: String,
        #[arg(long, default_value_t = 1)]
        cantidad: u32,
    },
}

#[derive(Subcommand, Debug)]
enum AcomodacionesAction {
    /// Create an acomodación.
    Create {
        /// Parent habitación.
        #[arg(long)]
        habitacion_id: Option<i64>,
        /// Occupancy type (SENCILLA, DOBLE, TRIPLE or CUADRUPLE).
        #[arg(long)]
        tipo: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(ClientConfig::default_path);
    let config = ClientConfig::load(&config_path)?;
    let server = resolve_server(
        cli.server.as_deref(),
        std::env::var("HOTEL_ADMIN_SERVER").ok(),
        &config,
    );

    let api = HttpHotelApi::new(server);
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Hoteles { action } => match action {
            HotelesAction::List => {
                let mut page = HotelListPage::new();
                page.load(&api).await;
                match page.state() {
                    PageState::Ready(hoteles) => {
                        if json_output {
                            println!("{}", serde_json::to_string_pretty(hoteles)?);
                        } else {
                            print_hoteles_table(hoteles);
                        }
                    }
                    PageState::Error(message) => anyhow::bail!("{}", message),
                    PageState::Loading => unreachable!("load completed"),
                }
            }

            HotelesAction::Get { id } => {
                let mut page = HotelDetailPage::new(id);
                page.load(&api).await;
                match page.state() {
                    PageState::Ready(hotel) => {
                        if json_output {
                            println!("{}", serde_json::to_string_pretty(hotel)?);
                        } else {
                            print_hotel_detail(hotel);
                        }
                    }
                    PageState::Error(message) => anyhow::bail!("{}", message),
                    PageState::Loading => unreachable!("load completed"),
                }
            }

            HotelesAction::Create {
                nombre,
                direccion,
                ciudad,
                nit,
                numero_habitaciones,
            } => {
                let mut page = HotelCreatePage::new();
                page.form.set_nombre(nombre);
                page.form.set_direccion(direccion);
                page.form.set_ciudad(ciudad);
                page.form.set_nit(nit);
                page.form.set_numero_habitaciones(numero_habitaciones);

                match page.submit(&api).await {
                    Some(_) => println!("Hotel creado."),
                    None => bail_on_form(page.form.errors(), page.error())?,
                }
            }

            HotelesAction::Update {
                id,
                nombre,
                direccion,
                ciudad,
                nit,
                numero_habitaciones,
            } => {
                let mut page = HotelEditPage::new(id);
                page.load(&api).await;
                if let Some(message) = page.state().error_message() {
                    anyhow::bail!("{}", message);
                }

                let Some(form) = page.form_mut() else {
                    anyhow::bail!("Error al cargar los datos del hotel. Intente nuevamente.");
                };
                if let Some(value) = nombre {
                    form.set_nombre(value);
                }
                if let Some(value) = direccion {
                    form.set_direccion(value);
                }
                if let Some(value) = ciudad {
                    form.set_ciudad(value);
                }
                if let Some(value) = nit {
                    form.set_nit(value);
                }
                if let Some(value) = numero_habitaciones {
                    form.set_numero_habitaciones(value);
                }

                match page.submit(&api).await {
                    Some(_) => println!("Hotel {} actualizado.", id),
                    None => {
                        let errors = page.form().map(HotelForm::errors);
                        match errors {
                            Some(errors) if !errors.is_empty() => bail_on_form(errors, None)?,
                            _ => anyhow::bail!("{}", page.error().unwrap_or("Error")),
                        }
                    }
                }
            }

            HotelesAction::Delete { id, yes } => {
                let mut page = HotelDetailPage::new(id);
                page.load(&api).await;
                let nombre = match page.state() {
                    PageState::Ready(hotel) => hotel.nombre.clone(),
                    PageState::Error(message) => anyhow::bail!("{}", message),
                    PageState::Loading => unreachable!("load completed"),
                };

                if !yes && !confirm_delete_prompt(&nombre)? {
                    println!("Cancelado.");
                    return Ok(());
                }

                page.request_delete();
                match page.confirm_delete(&api).await {
                    Some(_) => println!("Hotel {} eliminado.", id),
                    None => anyhow::bail!("{}", page.delete_error().unwrap_or("Error")),
                }
            }
        },

        Commands::Habitaciones { action } => match action {
            HabitacionesAction::List => {
                let habitaciones = api
                    .list_habitaciones()
                    .await
                    .map_err(|_| anyhow::anyhow!("Error al cargar las habitaciones. Intente nuevamente."))?;
                if json_output {
                    println!("{}", serde_json::to_string_pretty(&habitaciones)?);
                } else {
                    print_habitaciones_table(&habitaciones);
                }
            }

            HabitacionesAction::Create {
                hotel_id,
                tipo,
                cantidad,
            } => {
                let mut page = HabitacionCreatePage::new(hotel_id);
                page.load(&api).await;
                page.form.set_tipo(tipo);
                page.form.set_cantidad(cantidad);

                match page.submit(&api).await {
                    Some(_) => println!("Habitación creada."),
                    None => bail_on_form(page.form.errors(), page.error())?,
                }
            }
        },

        Commands::Acomodaciones { action } => match action {
            AcomodacionesAction::Create {
                habitacion_id,
                tipo,
            } => {
                let mut page = AcomodacionCreatePage::new(habitacion_id);
                page.load(&api).await;
                if let Some(tipo) = tipo {
                    page.form.set_tipo(tipo);
                }

                match page.submit(&api).await {
                    Some(_) => println!("Acomodación creada."),
                    None => bail_on_form(page.form.errors(), page.error())?,
                }
            }
        },

        Commands::Version => {
            println!("hotelctl v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Report validation messages per field, or the page-level error.
fn bail_on_form(errors: &FieldErrors, page_error: Option<&str>) -> Result<()> {
    if !errors.is_empty() {
        for (field, message) in errors.iter() {
            eprintln!("  {}: {}", field, message);
        }
        anyhow::bail!("Datos inválidos.");
    }
    anyhow::bail!("{}", page_error.unwrap_or("Error"))
}

fn confirm_delete_prompt(nombre: &str) -> Result<bool> {
    eprint!(
        "¿Estás seguro que deseas eliminar el hotel \"{}\"? Esta acción no se puede deshacer. [s/N]: ",
        nombre
    );
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("s") || answer.eq_ignore_ascii_case("y"))
}

fn print_hoteles_table(hoteles: &[Hotel]) {
    if hoteles.is_empty() {
        println!("No hay hoteles registrados");
        return;
    }
    println!(
        "{:<6} {:<30} {:<20} {:<15} {:>12}",
        "ID", "NOMBRE", "CIUDAD", "NIT", "HABITACIONES"
    );
    for hotel in hoteles {
        println!(
            "{:<6} {:<30} {:<20} {:<15} {:>12}",
            hotel.id, hotel.nombre, hotel.ciudad, hotel.nit, hotel.numero_habitaciones
        );
    }
}

fn print_hotel_detail(hotel: &Hotel) {
    println!("{}", hotel.nombre);
    println!("  Dirección: {}, {}", hotel.direccion, hotel.ciudad);
    println!("  NIT:       {}", hotel.nit);
    println!("  Número de habitaciones: {}", hotel.numero_habitaciones);

    match hotel.habitaciones.as_deref() {
        Some([]) | None => println!("  No hay habitaciones"),
        Some(habitaciones) => {
            println!("  Habitaciones:");
            for habitacion in habitaciones {
                println!(
                    "    [{}] {} x{}",
                    habitacion.id, habitacion.tipo, habitacion.cantidad
                );
                match habitacion.acomodaciones.as_deref() {
                    Some([]) | None => println!("      No hay acomodaciones configuradas"),
                    Some(acomodaciones) => {
                        for acomodacion in acomodaciones {
                            println!("      - {}", acomodacion.tipo);
                        }
                    }
                }
            }
        }
    }
}

fn print_habitaciones_table(habitaciones: &[Habitacion]) {
    if habitaciones.is_empty() {
        println!("No hay habitaciones");
        return;
    }
    println!(
        "{:<6} {:<10} {:<12} {:>8}  {}",
        "ID", "HOTEL", "TIPO", "CANTIDAD", "ACOMODACIONES"
    );
    for habitacion in habitaciones {
        let acomodaciones = habitacion
            .acomodaciones
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|a| a.tipo.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<6} {:<10} {:<12} {:>8}  {}",
            habitacion.id, habitacion.hotel_id, habitacion.tipo, habitacion.cantidad, acomodaciones
        );
    }
}
