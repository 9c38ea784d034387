//! HTTP client for the remote hotel management API.
//!
//! One method per remote operation. Every call is a single best-effort
//! round trip: no retries, no timeouts, no caching. The server owns all
//! persistence and business rules.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

use crate::model::{
    Acomodacion, AcomodacionDraft, Habitacion, HabitacionDraft, Hotel, HotelDraft,
};

/// Client-side API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Response obtained with a non-2xx status. The numeric code is the
    /// only detail preserved; the body is not inspected.
    #[error("request failed with status {0}")]
    Status(u16),

    /// No response obtained.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body did not decode as the expected shape.
    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Remote operations exposed by this client.
///
/// Update and delete exist for hotels only; the backend does not offer
/// them for habitaciones or acomodaciones.
#[async_trait]
pub trait HotelApi: Send + Sync {
    async fn list_hoteles(&self) -> Result<Vec<Hotel>, ApiError>;

    /// Single hotel with habitaciones and acomodaciones inlined.
    async fn get_hotel(&self, id: i64) -> Result<Hotel, ApiError>;

    async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel, ApiError>;

    /// Full replacement (PUT).
    async fn update_hotel(&self, id: i64, draft: &HotelDraft) -> Result<Hotel, ApiError>;

    async fn delete_hotel(&self, id: i64) -> Result<(), ApiError>;

    /// All habitaciones with their acomodaciones inlined.
    async fn list_habitaciones(&self) -> Result<Vec<Habitacion>, ApiError>;

    async fn create_habitacion(&self, draft: &HabitacionDraft) -> Result<Habitacion, ApiError>;

    async fn create_acomodacion(&self, draft: &AcomodacionDraft) -> Result<Acomodacion, ApiError>;
}

#[derive(Debug, Default)]
struct ClientStats {
    requests_sent: AtomicUsize,
    requests_succeeded: AtomicUsize,
    requests_failed: AtomicUsize,
}

/// Snapshot of the client's request counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClientStatsReport {
    pub requests_sent: usize,
    pub requests_succeeded: usize,
    pub requests_failed: usize,
}

/// [`HotelApi`] over HTTP/JSON via reqwest.
pub struct HttpHotelApi {
    http: reqwest::Client,
    base_url: String,
    stats: ClientStats,
}

impl HttpHotelApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            stats: ClientStats::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stats(&self) -> ClientStatsReport {
        ClientStatsReport {
            requests_sent: self.stats.requests_sent.load(Ordering::Relaxed),
            requests_succeeded: self.stats.requests_succeeded.load(Ordering::Relaxed),
            requests_failed: self.stats.requests_failed.load(Ordering::Relaxed),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a built request and map any non-2xx status to [`ApiError::Status`].
    async fn round_trip(
        &self,
        method: &str,
        url: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(method, url, "api request");
        self.stats.requests_sent.fetch_add(1, Ordering::Relaxed);

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                self.stats.requests_failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(method, url, error = %e, "api request failed to send");
                return Err(ApiError::Network(e));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            self.stats.requests_failed.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(method, url, status = status.as_u16(), "api request failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        self.stats.requests_succeeded.fetch_add(1, Ordering::Relaxed);
        Ok(resp)
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<R, ApiError> {
        let resp = self.round_trip(method, url, req).await?;
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HotelApi for HttpHotelApi {
    async fn list_hoteles(&self) -> Result<Vec<Hotel>, ApiError> {
        let url = self.url("/hoteles");
        self.fetch("GET", &url, self.http.get(&url)).await
    }

    async fn get_hotel(&self, id: i64) -> Result<Hotel, ApiError> {
        let url = self.url(&format!("/hoteles/{}", id));
        let req = self
            .http
            .get(&url)
            .query(&[("include", "habitaciones.acomodaciones")]);
        self.fetch("GET", &url, req).await
    }

    async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel, ApiError> {
        let url = self.url("/hoteles");
        self.fetch("POST", &url, self.http.post(&url).json(draft)).await
    }

    async fn update_hotel(&self, id: i64, draft: &HotelDraft) -> Result<Hotel, ApiError> {
        let url = self.url(&format!("/hoteles/{}", id));
        self.fetch("PUT", &url, self.http.put(&url).json(draft)).await
    }

    async fn delete_hotel(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/hoteles/{}", id));
        self.round_trip("DELETE", &url, self.http.delete(&url)).await?;
        Ok(())
    }

    async fn list_habitaciones(&self) -> Result<Vec<Habitacion>, ApiError> {
        let url = self.url("/habitaciones");
        let req = self.http.get(&url).query(&[("include", "acomodaciones")]);
        self.fetch("GET", &url, req).await
    }

    async fn create_habitacion(&self, draft: &HabitacionDraft) -> Result<Habitacion, ApiError> {
        let url = self.url("/habitaciones");
        self.fetch("POST", &url, self.http.post(&url).json(draft)).await
    }

    async fn create_acomodacion(&self, draft: &AcomodacionDraft) -> Result<Acomodacion, ApiError> {
        let url = self.url("/acomodaciones");
        self.fetch("POST", &url, self.http.post(&url).json(draft)).await
    }
}

// In-memory stand-in for the remote API, for exercising forms and page
// controllers without a network.
#[cfg(test)]
pub mod fake {
    use super::*;
    use std::sync::atomic::AtomicI64;
    use std::sync::Mutex;

    pub fn sample_hotel(id: i64, nombre: &str) -> Hotel {
        Hotel {
            id,
            nombre: nombre.to_string(),
            direccion: "Cra 7 #12-40".to_string(),
            ciudad: "Bogotá".to_string(),
            nit: "900123456-1".to_string(),
            numero_habitaciones: 10,
            habitaciones: None,
        }
    }

    pub fn sample_habitacion(id: i64, hotel_id: i64) -> Habitacion {
        Habitacion {
            id,
            hotel_id,
            tipo: "ESTANDAR".to_string(),
            cantidad: 2,
            acomodaciones: Some(Vec::new()),
        }
    }

    #[derive(Default)]
    pub struct FakeHotelApi {
        hoteles: Mutex<Vec<Hotel>>,
        habitaciones: Mutex<Vec<Habitacion>>,
        next_id: AtomicI64,
        fail_with: Mutex<Option<u16>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeHotelApi {
        pub fn new() -> Self {
            Self {
                next_id: AtomicI64::new(100),
                ..Self::default()
            }
        }

        pub fn push_hotel(&self, hotel: Hotel) {
            self.hoteles.lock().unwrap().push(hotel);
        }

        pub fn push_habitacion(&self, habitacion: Habitacion) {
            self.habitaciones.lock().unwrap().push(habitacion);
        }

        /// Make every subsequent call fail with this status.
        pub fn fail_with_status(&self, status: u16) {
            *self.fail_with.lock().unwrap() = Some(status);
        }

        pub fn clear_failure(&self) {
            *self.fail_with.lock().unwrap() = None;
        }

        pub fn hoteles(&self) -> Vec<Hotel> {
            self.hoteles.lock().unwrap().clone()
        }

        pub fn habitaciones(&self) -> Vec<Habitacion> {
            self.habitaciones.lock().unwrap().clone()
        }

        /// Operations invoked so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, op: &str) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(op.to_string());
            match *self.fail_with.lock().unwrap() {
                Some(status) => Err(ApiError::Status(status)),
                None => Ok(()),
            }
        }

        fn next_id(&self) -> i64 {
            self.next_id.fetch_add(1, Ordering::Relaxed) + 1
        }
    }

    #[async_trait]
    impl HotelApi for FakeHotelApi {
        async fn list_hoteles(&self) -> Result<Vec<Hotel>, ApiError> {
            self.record("list_hoteles")?;
            Ok(self.hoteles())
        }

        async fn get_hotel(&self, id: i64) -> Result<Hotel, ApiError> {
            self.record("get_hotel")?;
            self.hoteles()
                .into_iter()
                .find(|h| h.id == id)
                .ok_or(ApiError::Status(404))
        }

        async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel, ApiError> {
            self.record("create_hotel")?;
            let hotel = Hotel {
                id: self.next_id(),
                nombre: draft.nombre.clone(),
                direccion: draft.direccion.clone(),
                ciudad: draft.ciudad.clone(),
                nit: draft.nit.clone(),
                numero_habitaciones: draft.numero_habitaciones,
                habitaciones: None,
            };
            self.push_hotel(hotel.clone());
            Ok(hotel)
        }

        async fn update_hotel(&self, id: i64, draft: &HotelDraft) -> Result<Hotel, ApiError> {
            self.record("update_hotel")?;
            let mut hoteles = self.hoteles.lock().unwrap();
            let hotel = hoteles
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or(ApiError::Status(404))?;
            hotel.nombre = draft.nombre.clone();
            hotel.direccion = draft.direccion.clone();
            hotel.ciudad = draft.ciudad.clone();
            hotel.nit = draft.nit.clone();
            hotel.numero_habitaciones = draft.numero_habitaciones;
            Ok(hotel.clone())
        }

        async fn delete_hotel(&self, id: i64) -> Result<(), ApiError> {
            self.record("delete_hotel")?;
            let mut hoteles = self.hoteles.lock().unwrap();
            let before = hoteles.len();
            hoteles.retain(|h| h.id != id);
            if hoteles.len() == before {
                return Err(ApiError::Status(404));
            }
            Ok(())
        }

        async fn list_habitaciones(&self) -> Result<Vec<Habitacion>, ApiError> {
            self.record("list_habitaciones")?;
            Ok(self.habitaciones())
        }

        async fn create_habitacion(&self, draft: &HabitacionDraft) -> Result<Habitacion, ApiError> {
            self.record("create_habitacion")?;
            let habitacion = Habitacion {
                id: self.next_id(),
                hotel_id: draft.hotel_id,
                tipo: draft.tipo.clone(),
                cantidad: draft.cantidad,
                acomodaciones: None,
            };
            self.push_habitacion(habitacion.clone());
            Ok(habitacion)
        }

        async fn create_acomodacion(&self, draft: &AcomodacionDraft) -> Result<Acomodacion, ApiError> {
            self.record("create_acomodacion")?;
            Ok(Acomodacion {
                id: self.next_id(),
                habitacion_id: draft.habitacion_id,
                tipo: draft.tipo.clone(),
            })
        }
    }
}
