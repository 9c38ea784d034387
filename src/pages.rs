//! Per-screen orchestration: fetch on entry, hold loading/error state,
//! translate submit and delete outcomes into navigation.
//!
//! Controllers are plain state machines over a [`HotelApi`]; rendering
//! (CLI, TUI, whatever) reads their state and calls back in.

use crate::api::HotelApi;
use crate::forms::{AcomodacionForm, HabitacionForm, HotelForm};
use crate::model::Hotel;

/// Lifecycle of a screen's primary data.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PageState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Where a completed flow sends the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    HotelList,
    HotelDetail(i64),
    /// Previous screen, whatever it was.
    Back,
}

/// The hotel index.
#[derive(Debug)]
pub struct HotelListPage {
    state: PageState<Vec<Hotel>>,
}

impl HotelListPage {
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
        }
    }

    pub async fn load(&mut self, api: &dyn HotelApi) {
        self.state = PageState::Loading;
        match api.list_hoteles().await {
            Ok(hoteles) => self.state = PageState::Ready(hoteles),
            Err(e) => {
                tracing::error!(error = %e, "hotel list load failed");
                self.state =
                    PageState::Error("Error al cargar los hoteles. Intente nuevamente.".to_string());
            }
        }
    }

    pub fn state(&self) -> &PageState<Vec<Hotel>> {
        &self.state
    }

    pub fn hoteles(&self) -> &[Hotel] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Delete-success callback: drop the hotel from the rendered list
    /// without refetching.
    pub fn remove_locally(&mut self, id: i64) {
        if let PageState::Ready(hoteles) = &mut self.state {
            hoteles.retain(|h| h.id != id);
        }
    }
}

impl Default for HotelListPage {
    fn default() -> Self {
        Self::new()
    }
}

/// A hotel's detail screen, with the confirmation-gated delete flow.
#[derive(Debug)]
pub struct HotelDetailPage {
    id: i64,
    state: PageState<Hotel>,
    confirm_visible: bool,
    deleting: bool,
    delete_error: Option<String>,
}

impl HotelDetailPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: PageState::Loading,
            confirm_visible: false,
            deleting: false,
            delete_error: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub async fn load(&mut self, api: &dyn HotelApi) {
        self.state = PageState::Loading;
        match api.get_hotel(self.id).await {
            Ok(hotel) => self.state = PageState::Ready(hotel),
            Err(e) => {
                tracing::error!(error = %e, id = self.id, "hotel detail load failed");
                self.state = PageState::Error(
                    "Error al cargar los detalles del hotel. Intente nuevamente.".to_string(),
                );
            }
        }
    }

    pub fn state(&self) -> &PageState<Hotel> {
        &self.state
    }

    pub fn hotel(&self) -> Option<&Hotel> {
        self.state.data()
    }

    pub fn confirm_pending(&self) -> bool {
        self.confirm_visible
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn delete_error(&self) -> Option<&str> {
        self.delete_error.as_deref()
    }

    /// Open the confirmation step; the destructive call stays gated
    /// behind [`Self::confirm_delete`].
    pub fn request_delete(&mut self) {
        self.confirm_visible = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_visible = false;
    }

    /// Issue the delete. `None` without a pending confirmation.
    pub async fn confirm_delete(&mut self, api: &dyn HotelApi) -> Option<Nav> {
        if !self.confirm_visible {
            return None;
        }
        self.deleting = true;
        self.delete_error = None;

        let result = api.delete_hotel(self.id).await;
        self.deleting = false;
        self.confirm_visible = false;

        match result {
            Ok(()) => Some(Nav::HotelList),
            Err(e) => {
                tracing::error!(error = %e, id = self.id, "hotel delete failed");
                self.delete_error =
                    Some("Error al eliminar el hotel. Por favor, intente nuevamente.".to_string());
                None
            }
        }
    }
}

/// The create-hotel screen.
#[derive(Debug, Default)]
pub struct HotelCreatePage {
    pub form: HotelForm,
    submitting: bool,
    error: Option<String>,
}

impl HotelCreatePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and create. `None` keeps the user on the form, either
    /// with field errors or with a page error and the input intact.
    pub async fn submit(&mut self, api: &dyn HotelApi) -> Option<Nav> {
        let draft = self.form.submit()?;

        self.submitting = true;
        self.error = None;
        let result = api.create_hotel(&draft).await;
        self.submitting = false;

        match result {
            Ok(_) => Some(Nav::HotelList),
            Err(e) => {
                tracing::error!(error = %e, "hotel create failed");
                self.error =
                    Some("Error al crear el hotel. Por favor, intente nuevamente.".to_string());
                None
            }
        }
    }
}

/// The edit-hotel screen: fetch, pre-fill, full-replacement update.
#[derive(Debug)]
pub struct HotelEditPage {
    id: i64,
    state: PageState<HotelForm>,
    submitting: bool,
    error: Option<String>,
}

impl HotelEditPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: PageState::Loading,
            submitting: false,
            error: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub async fn load(&mut self, api: &dyn HotelApi) {
        self.state = PageState::Loading;
        match api.get_hotel(self.id).await {
            Ok(hotel) => self.state = PageState::Ready(HotelForm::from_hotel(&hotel)),
            Err(e) => {
                tracing::error!(error = %e, id = self.id, "hotel edit load failed");
                self.state = PageState::Error(
                    "Error al cargar los datos del hotel. Intente nuevamente.".to_string(),
                );
            }
        }
    }

    pub fn state(&self) -> &PageState<HotelForm> {
        &self.state
    }

    pub fn form(&self) -> Option<&HotelForm> {
        self.state.data()
    }

    pub fn form_mut(&mut self) -> Option<&mut HotelForm> {
        match &mut self.state {
            PageState::Ready(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self, api: &dyn HotelApi) -> Option<Nav> {
        let draft = match &mut self.state {
            PageState::Ready(form) => form.submit()?,
            _ => return None,
        };

        self.submitting = true;
        self.error = None;
        let result = api.update_hotel(self.id, &draft).await;
        self.submitting = false;

        match result {
            Ok(_) => Some(Nav::HotelDetail(self.id)),
            Err(e) => {
                tracing::error!(error = %e, id = self.id, "hotel update failed");
                self.error = Some(
                    "Error al actualizar el hotel. Por favor, intente nuevamente.".to_string(),
                );
                None
            }
        }
    }
}

/// The create-habitación screen. A hotel id supplied from the referring
/// screen pre-selects and locks the hotel, and steers the post-create
/// navigation back to that hotel.
#[derive(Debug)]
pub struct HabitacionCreatePage {
    hotel_id: Option<i64>,
    pub form: HabitacionForm,
    submitting: bool,
    error: Option<String>,
}

impl HabitacionCreatePage {
    pub fn new(hotel_id: Option<i64>) -> Self {
        let form = match hotel_id {
            Some(id) => HabitacionForm::with_hotel(id),
            None => HabitacionForm::new(),
        };
        Self {
            hotel_id,
            form,
            submitting: false,
            error: None,
        }
    }

    pub async fn load(&mut self, api: &dyn HotelApi) {
        self.form.load_options(api).await;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self, api: &dyn HotelApi) -> Option<Nav> {
        let draft = self.form.submit()?;

        self.submitting = true;
        self.error = None;
        let result = api.create_habitacion(&draft).await;
        self.submitting = false;

        match result {
            Ok(_) => Some(match self.hotel_id {
                Some(id) => Nav::HotelDetail(id),
                None => Nav::HotelList,
            }),
            Err(e) => {
                tracing::error!(error = %e, "habitacion create failed");
                self.error = Some(
                    "Error al crear la habitación. Por favor, intente nuevamente.".to_string(),
                );
                None
            }
        }
    }
}

/// The create-acomodación screen. Success navigates back to wherever
/// the user came from.
#[derive(Debug)]
pub struct AcomodacionCreatePage {
    pub form: AcomodacionForm,
    submitting: bool,
    error: Option<String>,
}

impl AcomodacionCreatePage {
    pub fn new(habitacion_id: Option<i64>) -> Self {
        let form = match habitacion_id {
            Some(id) => AcomodacionForm::with_habitacion(id),
            None => AcomodacionForm::new(),
        };
        Self {
            form,
            submitting: false,
            error: None,
        }
    }

    pub async fn load(&mut self, api: &dyn HotelApi) {
        self.form.load_options(api).await;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self, api: &dyn HotelApi) -> Option<Nav> {
        let draft = self.form.submit()?;

        self.submitting = true;
        self.error = None;
        let result = api.create_acomodacion(&draft).await;
        self.submitting = false;

        match result {
            Ok(_) => Some(Nav::Back),
            Err(e) => {
                tracing::error!(error = %e, "acomodacion create failed");
                self.error = Some(
                    "Error al crear la acomodación. Por favor, intente nuevamente.".to_string(),
                );
                None
            }
        }
    }
}
