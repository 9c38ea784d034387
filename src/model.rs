//! Wire-level data model for the hotel management API.
//!
//! Field names mirror the backend's JSON (Spanish). Identifiers are
//! always server-assigned; the client never fabricates an `id`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A managed property. `habitaciones` is only populated when the API is
/// asked for the deep include (single-hotel fetch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    pub ciudad: String,
    pub nit: String,
    /// Declared room count. Independent of the actual `habitaciones`
    /// collection size; the backend does not reconcile the two.
    pub numero_habitaciones: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitaciones: Option<Vec<Habitacion>>,
}

/// A room-type/quantity record belonging to one hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habitacion {
    pub id: i64,
    pub hotel_id: i64,
    /// Free string on the wire; the UI layer offers [`TipoHabitacion`].
    pub tipo: String,
    pub cantidad: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acomodaciones: Option<Vec<Acomodacion>>,
}

/// An occupancy-type record belonging to one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acomodacion {
    pub id: i64,
    pub habitacion_id: i64,
    /// Constrained to [`TipoAcomodacion`] by the validation layer.
    pub tipo: String,
}

// Drafts: what create/update requests carry, i.e. the entity minus its id.

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HotelDraft {
    pub nombre: String,
    pub direccion: String,
    pub ciudad: String,
    pub nit: String,
    pub numero_habitaciones: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HabitacionDraft {
    /// Zero means "no hotel selected yet".
    pub hotel_id: i64,
    pub tipo: String,
    pub cantidad: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AcomodacionDraft {
    /// Zero means "no habitación selected yet".
    pub habitacion_id: i64,
    pub tipo: String,
}

/// Raised when a string is not part of a closed vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized value: {0}")]
pub struct UnknownTipo(pub String);

/// Room types offered by the UI. The backend accepts any non-empty
/// string, so this is a presentation constraint, not a wire one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoHabitacion {
    Estandar,
    Junior,
    Suite,
}

impl TipoHabitacion {
    pub const ALL: [TipoHabitacion; 3] = [
        TipoHabitacion::Estandar,
        TipoHabitacion::Junior,
        TipoHabitacion::Suite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipoHabitacion::Estandar => "ESTANDAR",
            TipoHabitacion::Junior => "JUNIOR",
            TipoHabitacion::Suite => "SUITE",
        }
    }
}

impl fmt::Display for TipoHabitacion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoHabitacion {
    type Err = UnknownTipo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ESTANDAR" => Ok(TipoHabitacion::Estandar),
            "JUNIOR" => Ok(TipoHabitacion::Junior),
            "SUITE" => Ok(TipoHabitacion::Suite),
            other => Err(UnknownTipo(other.to_string())),
        }
    }
}

/// Occupancy types. Closed set: validation rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoAcomodacion {
    Sencilla,
    Doble,
    Triple,
    Cuadruple,
}

impl TipoAcomodacion {
    pub const ALL: [TipoAcomodacion; 4] = [
        TipoAcomodacion::Sencilla,
        TipoAcomodacion::Doble,
        TipoAcomodacion::Triple,
        TipoAcomodacion::Cuadruple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipoAcomodacion::Sencilla => "SENCILLA",
            TipoAcomodacion::Doble => "DOBLE",
            TipoAcomodacion::Triple => "TRIPLE",
            TipoAcomodacion::Cuadruple => "CUADRUPLE",
        }
    }
}

impl fmt::Display for TipoAcomodacion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoAcomodacion {
    type Err = UnknownTipo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SENCILLA" => Ok(TipoAcomodacion::Sencilla),
            "DOBLE" => Ok(TipoAcomodacion::Doble),
            "TRIPLE" => Ok(TipoAcomodacion::Triple),
            "CUADRUPLE" => Ok(TipoAcomodacion::Cuadruple),
            other => Err(UnknownTipo(other.to_string())),
        }
    }
}

impl Hotel {
    /// The entity's fields as a draft, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> HotelDraft {
        HotelDraft {
            nombre: self.nombre.clone(),
            direccion: self.direccion.clone(),
            ciudad: self.ciudad.clone(),
            nit: self.nit.clone(),
            numero_habitaciones: self.numero_habitaciones,
        }
    }
}
