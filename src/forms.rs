//! Form state and validation for the three entity drafts.
//!
//! A form holds a draft plus a per-field error map. Validation runs on
//! submit and replaces the whole map; editing a field clears that
//! field's message. The validated draft is handed back to the caller,
//! which owns the actual write and its error reporting.

use crate::api::HotelApi;
use crate::model::{
    AcomodacionDraft, Habitacion, HabitacionDraft, Hotel, HotelDraft, TipoAcomodacion,
};

/// Per-field validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    fn set(&mut self, field: &'static str, message: &str) {
        self.errors.push((field, message.to_string()));
    }

    fn remove(&mut self, field: &str) {
        self.errors.retain(|(name, _)| *name != field);
    }
}

/// Draft editor for a hotel (create and edit share it).
#[derive(Debug, Clone, Default)]
pub struct HotelForm {
    data: HotelDraft,
    errors: FieldErrors,
}

impl HotelForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled from an existing hotel, for the edit flow.
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            data: hotel.to_draft(),
            errors: FieldErrors::default(),
        }
    }

    pub fn data(&self) -> &HotelDraft {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_nombre(&mut self, value: impl Into<String>) {
        self.data.nombre = value.into();
        self.errors.remove("nombre");
    }

    pub fn set_direccion(&mut self, value: impl Into<String>) {
        self.data.direccion = value.into();
        self.errors.remove("direccion");
    }

    pub fn set_ciudad(&mut self, value: impl Into<String>) {
        self.data.ciudad = value.into();
        self.errors.remove("ciudad");
    }

    pub fn set_nit(&mut self, value: impl Into<String>) {
        self.data.nit = value.into();
        self.errors.remove("nit");
    }

    pub fn set_numero_habitaciones(&mut self, value: u32) {
        self.data.numero_habitaciones = value;
        self.errors.remove("numero_habitaciones");
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.data.nombre.is_empty() {
            errors.set("nombre", "El nombre es requerido");
        }
        if self.data.direccion.is_empty() {
            errors.set("direccion", "La dirección es requerida");
        }
        if self.data.ciudad.is_empty() {
            errors.set("ciudad", "La ciudad es requerida");
        }
        if self.data.nit.is_empty() {
            errors.set("nit", "El NIT es requerido");
        }
        if self.data.numero_habitaciones == 0 {
            errors.set(
                "numero_habitaciones",
                "El número de habitaciones debe ser positivo",
            );
        }
        errors
    }

    /// Validate and yield the draft, or record the field errors.
    pub fn submit(&mut self) -> Option<HotelDraft> {
        self.errors = self.validate();
        if self.errors.is_empty() {
            Some(self.data.clone())
        } else {
            None
        }
    }
}

/// Draft editor for a habitación. The hotel selector is fed from the
/// API; a parent id supplied up front pre-fills and locks it.
#[derive(Debug, Default)]
pub struct HabitacionForm {
    data: HabitacionDraft,
    errors: FieldErrors,
    hoteles: Vec<Hotel>,
    hotel_locked: bool,
}

impl HabitacionForm {
    pub fn new() -> Self {
        Self {
            data: HabitacionDraft {
                hotel_id: 0,
                tipo: String::new(),
                cantidad: 1,
            },
            ..Self::default()
        }
    }

    /// Pre-selects the hotel and disables the selector.
    pub fn with_hotel(hotel_id: i64) -> Self {
        let mut form = Self::new();
        form.data.hotel_id = hotel_id;
        form.hotel_locked = true;
        form
    }

    pub fn data(&self) -> &HabitacionDraft {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Hotels available in the selector.
    pub fn hoteles(&self) -> &[Hotel] {
        &self.hoteles
    }

    pub fn hotel_locked(&self) -> bool {
        self.hotel_locked
    }

    /// Populate the hotel selector. A failed load leaves the options
    /// empty; the error is logged, not surfaced.
    pub async fn load_options(&mut self, api: &dyn HotelApi) {
        match api.list_hoteles().await {
            Ok(hoteles) => self.hoteles = hoteles,
            Err(e) => tracing::error!(error = %e, "failed to load hoteles for selector"),
        }
    }

    /// Ignored while the selector is locked to a supplied parent.
    pub fn select_hotel(&mut self, hotel_id: i64) {
        if self.hotel_locked {
            return;
        }
        self.data.hotel_id = hotel_id;
        self.errors.remove("hotel_id");
    }

    pub fn set_tipo(&mut self, value: impl Into<String>) {
        self.data.tipo = value.into();
        self.errors.remove("tipo");
    }

    pub fn set_cantidad(&mut self, value: u32) {
        self.data.cantidad = value;
        self.errors.remove("cantidad");
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.data.hotel_id <= 0 {
            errors.set("hotel_id", "El hotel es requerido");
        }
        if self.data.tipo.is_empty() {
            errors.set("tipo", "El tipo es requerido");
        }
        if self.data.cantidad == 0 {
            errors.set("cantidad", "La cantidad debe ser positiva");
        }
        errors
    }

    pub fn submit(&mut self) -> Option<HabitacionDraft> {
        self.errors = self.validate();
        if self.errors.is_empty() {
            Some(self.data.clone())
        } else {
            None
        }
    }
}

/// Draft editor for an acomodación. Same selector rules as
/// [`HabitacionForm`], with the room list as options.
#[derive(Debug, Default)]
pub struct AcomodacionForm {
    data: AcomodacionDraft,
    errors: FieldErrors,
    habitaciones: Vec<Habitacion>,
    habitacion_locked: bool,
}

impl AcomodacionForm {
    pub fn new() -> Self {
        Self {
            data: AcomodacionDraft {
                habitacion_id: 0,
                tipo: TipoAcomodacion::Sencilla.as_str().to_string(),
            },
            ..Self::default()
        }
    }

    /// Pre-selects the habitación and disables the selector.
    pub fn with_habitacion(habitacion_id: i64) -> Self {
        let mut form = Self::new();
        form.data.habitacion_id = habitacion_id;
        form.habitacion_locked = true;
        form
    }

    pub fn data(&self) -> &AcomodacionDraft {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn habitaciones(&self) -> &[Habitacion] {
        &self.habitaciones
    }

    pub fn habitacion_locked(&self) -> bool {
        self.habitacion_locked
    }

    /// Populate the habitación selector. Failures are logged only.
    pub async fn load_options(&mut self, api: &dyn HotelApi) {
        match api.list_habitaciones().await {
            Ok(habitaciones) => self.habitaciones = habitaciones,
            Err(e) => tracing::error!(error = %e, "failed to load habitaciones for selector"),
        }
    }

    /// Ignored while the selector is locked to a supplied parent.
    pub fn select_habitacion(&mut self, habitacion_id: i64) {
        if self.habitacion_locked {
            return;
        }
        self.data.habitacion_id = habitacion_id;
        self.errors.remove("habitacion_id");
    }

    /// Takes the raw selection value; validation enforces the closed set.
    pub fn set_tipo(&mut self, value: impl Into<String>) {
        self.data.tipo = value.into();
        self.errors.remove("tipo");
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.data.habitacion_id <= 0 {
            errors.set("habitacion_id", "La habitación es requerida");
        }
        if self.data.tipo.parse::<TipoAcomodacion>().is_err() {
            errors.set("tipo", "El tipo de acomodación es requerido");
        }
        errors
    }

    pub fn submit(&mut self) -> Option<AcomodacionDraft> {
        self.errors = self.validate();
        if self.errors.is_empty() {
            Some(self.data.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{sample_hotel, FakeHotelApi};
    use test_case::test_case;

    #[test]
    fn empty_hotel_form_reports_every_field() {
        let mut form = HotelForm::new();

        assert!(form.submit().is_none());
        let errors = form.errors();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("nombre"), Some("El nombre es requerido"));
        assert_eq!(errors.get("direccion"), Some("La dirección es requerida"));
        assert_eq!(errors.get("ciudad"), Some("La ciudad es requerida"));
        assert_eq!(errors.get("nit"), Some("El NIT es requerido"));
        assert_eq!(
            errors.get("numero_habitaciones"),
            Some("El número de habitaciones debe ser positivo")
        );
    }

    #[test]
    fn zero_rooms_rejected_one_accepted() {
        let mut form = HotelForm::new();
        form.set_nombre("Hotel Central");
        form.set_direccion("Cra 7 #12-40");
        form.set_ciudad("Bogotá");
        form.set_nit("900123456-1");

        form.set_numero_habitaciones(0);
        assert!(form.submit().is_none());
        assert!(form.errors().get("numero_habitaciones").is_some());

        form.set_numero_habitaciones(1);
        let draft = form.submit().expect("draft");
        assert_eq!(draft.numero_habitaciones, 1);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = HotelForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), 5);

        form.set_nombre("Hotel Central");
        assert!(form.errors().get("nombre").is_none());
        assert_eq!(form.errors().len(), 4);
        assert!(form.errors().get("ciudad").is_some());
    }

    #[test]
    fn resubmit_replaces_the_error_map() {
        let mut form = HotelForm::new();
        assert!(form.submit().is_none());

        form.set_nombre("Hotel Central");
        form.set_direccion("Cra 7 #12-40");
        form.set_ciudad("Bogotá");

        assert!(form.submit().is_none());
        let errors = form.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("nombre").is_none());
        assert!(errors.get("nit").is_some());
        assert!(errors.get("numero_habitaciones").is_some());
    }

    #[test]
    fn edit_form_prefills_from_hotel() {
        let hotel = sample_hotel(4, "Hotel Decameron");
        let form = HotelForm::from_hotel(&hotel);
        assert_eq!(form.data(), &hotel.to_draft());
    }

    #[test]
    fn habitacion_form_requires_a_selection() {
        let mut form = HabitacionForm::new();
        form.set_tipo("SUITE");
        form.set_cantidad(2);

        assert!(form.submit().is_none());
        assert_eq!(form.errors().get("hotel_id"), Some("El hotel es requerido"));

        form.select_hotel(4);
        let draft = form.submit().expect("draft");
        assert_eq!(draft.hotel_id, 4);
        assert_eq!(draft.tipo, "SUITE");
    }

    #[test]
    fn habitacion_form_rejects_zero_cantidad_and_empty_tipo() {
        let mut form = HabitacionForm::new();
        form.select_hotel(4);
        form.set_cantidad(0);

        assert!(form.submit().is_none());
        assert_eq!(form.errors().get("tipo"), Some("El tipo es requerido"));
        assert_eq!(
            form.errors().get("cantidad"),
            Some("La cantidad debe ser positiva")
        );
    }

    #[test]
    fn supplied_parent_locks_the_hotel_selector() {
        let mut form = HabitacionForm::with_hotel(7);
        assert!(form.hotel_locked());

        // Dropdown interaction must not move a locked selector.
        form.select_hotel(99);
        form.set_tipo("ESTANDAR");
        form.set_cantidad(3);

        let draft = form.submit().expect("draft");
        assert_eq!(draft.hotel_id, 7);
    }

    #[tokio::test]
    async fn habitacion_form_loads_hotel_options() {
        let api = FakeHotelApi::new();
        api.push_hotel(sample_hotel(1, "Hotel Central"));
        api.push_hotel(sample_hotel(2, "Hotel Decameron"));

        let mut form = HabitacionForm::new();
        form.load_options(&api).await;
        assert_eq!(form.hoteles().len(), 2);
    }

    #[tokio::test]
    async fn failed_option_load_leaves_selector_empty() {
        let api = FakeHotelApi::new();
        api.fail_with_status(500);

        let mut form = HabitacionForm::new();
        form.load_options(&api).await;
        assert!(form.hoteles().is_empty());
    }

    #[test_case("SENCILLA")]
    #[test_case("DOBLE")]
    #[test_case("TRIPLE")]
    #[test_case("CUADRUPLE")]
    fn acomodacion_form_accepts_each_known_tipo(tipo: &str) {
        let mut form = AcomodacionForm::with_habitacion(9);
        form.set_tipo(tipo);

        let draft = form.submit().expect("draft");
        assert_eq!(draft.tipo, tipo);
        assert_eq!(draft.habitacion_id, 9);
    }

    #[test_case("KING")]
    #[test_case("sencilla")]
    #[test_case("QUINTUPLE")]
    #[test_case("")]
    fn acomodacion_form_rejects_unknown_tipo(tipo: &str) {
        let mut form = AcomodacionForm::with_habitacion(9);
        form.set_tipo(tipo);

        assert!(form.submit().is_none());
        assert_eq!(
            form.errors().get("tipo"),
            Some("El tipo de acomodación es requerido")
        );
    }

    #[test]
    fn acomodacion_form_defaults_to_sencilla() {
        let form = AcomodacionForm::new();
        assert_eq!(form.data().tipo, "SENCILLA");
    }

    #[test]
    fn acomodacion_form_requires_a_habitacion() {
        let mut form = AcomodacionForm::new();
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors().get("habitacion_id"),
            Some("La habitación es requerida")
        );

        form.select_habitacion(9);
        assert!(form.submit().is_some());
    }

    #[test]
    fn locked_habitacion_selector_ignores_interaction() {
        let mut form = AcomodacionForm::with_habitacion(9);
        form.select_habitacion(123);
        let draft = form.submit().expect("draft");
        assert_eq!(draft.habitacion_id, 9);
    }
}
