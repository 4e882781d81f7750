//! HTTP reservation store.
//!
//! Talks to a script endpoint that dispatches on an `action` parameter:
//!
//! | action          | method | payload                           |
//! |-----------------|--------|-----------------------------------|
//! | `getReservas`   | GET    | `?data=YYYY-MM-DD`                |
//! | `createReserva` | POST   | reservation fields                |
//! | `confirmarPix`  | POST   | `id`, `email`, code and timestamp |
//! | `getDashboard`  | GET    | `?data=YYYY-MM-DD`                |
//!
//! Every answer is wrapped as `{"data": ...}`. Field and status names on the
//! wire are Portuguese; they are translated at this boundary and never leak
//! into the domain types.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::blocking::{Client, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;
use crate::dashboard::DashboardData;
use crate::error::{Error, Result};
use crate::reservation::{parse_date, parse_time};
use crate::{
    Confirmation, ConfirmationCode, NewReservation, Reservation, ReservationId, ReservationStatus,
    ReservationUpdate,
};

use super::ReservationStore;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A reservation store backed by a remote HTTP endpoint.
///
/// Records returned by `list_by_date` and `append` are remembered so that
/// `get_by_id` can answer for them; the protocol itself has no point read.
#[derive(Debug)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
    seen: RefCell<HashMap<ReservationId, Reservation>>,
}

impl RemoteStore {
    /// Creates a store for the endpoint at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            seen: RefCell::new(HashMap::new()),
        })
    }

    /// Creates a store from the `remote` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let timeout = config
            .timeout_seconds
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        Self::new(config.url.clone(), timeout)
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: DeserializeOwned>(&self, action: &str, date: NaiveDate) -> Result<Option<T>> {
        let date = date.format("%Y-%m-%d").to_string();
        log::debug!("GET {} action={action} data={date}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("action", action), ("data", date.as_str())])
            .send()?;
        Self::read_envelope(action, response)
    }

    fn post<B: Serialize>(&self, action: &str, body: &B) -> Result<Response> {
        log::debug!("POST {} action={action}", self.base_url);
        Ok(self.client.post(&self.base_url).json(body).send()?)
    }

    fn read_envelope<T: DeserializeOwned>(action: &str, response: Response) -> Result<Option<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteRejected {
                action: action.to_string(),
                status: status.as_u16(),
            });
        }
        let envelope: Envelope<T> = response.json()?;
        Ok(envelope.data)
    }

    fn remember(&self, reservation: &Reservation) {
        self.seen
            .borrow_mut()
            .insert(reservation.id().clone(), reservation.clone());
    }
}

impl ReservationStore for RemoteStore {
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        let wire: Vec<WireReservation> = self.get("getReservas", date)?.unwrap_or_default();
        let reservations = wire
            .into_iter()
            .map(|w| w.into_reservation("getReservas"))
            .collect::<Result<Vec<_>>>()?;
        for reservation in &reservations {
            self.remember(reservation);
        }
        Ok(reservations)
    }

    fn get_by_id(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        match self.seen.borrow().get(id) {
            Some(reservation) => Ok(Some(reservation.clone())),
            None => Err(Error::Unsupported {
                operation: format!("looking up reservation {id} without listing its date"),
            }),
        }
    }

    fn append(&mut self, reservation: NewReservation) -> Result<Reservation> {
        let body = CreateRequest {
            action: "createReserva",
            reservation: WireReservation::from(&reservation),
        };
        let response = self.post("createReserva", &body)?;
        let wire: WireReservation =
            Self::read_envelope("createReserva", response)?.ok_or_else(|| {
                Error::MalformedResponse {
                    action: "createReserva".into(),
                    details: "response carried no data".into(),
                }
            })?;

        let stored = wire.into_reservation("createReserva")?;
        self.remember(&stored);
        Ok(stored)
    }

    fn update_by_id(&mut self, id: &ReservationId, update: &ReservationUpdate) -> Result<bool> {
        let Some(confirmation) = update.confirmation.as_ref() else {
            return Err(Error::Unsupported {
                operation: "status changes other than payment confirmation".into(),
            });
        };

        let body = ConfirmRequest {
            action: "confirmarPix",
            id,
            email: confirmation.confirmed_by(),
            codigo_confirmacao: confirmation.code().as_str(),
            confirmado_em: confirmation.confirmed_at(),
        };
        let response = self.post("confirmarPix", &body)?;
        if !response.status().is_success() {
            log::debug!(
                "confirmarPix for {id} answered HTTP {}",
                response.status().as_u16()
            );
            return Ok(false);
        }

        if let Some(cached) = self.seen.borrow_mut().get_mut(id) {
            if let Err(e) = update.apply_to(cached) {
                log::warn!("cached copy of reservation {id} is stale: {e}");
            }
        }
        Ok(true)
    }

    fn dashboard(&self, date: NaiveDate) -> Result<DashboardData> {
        let wire: WireDashboard = self.get("getDashboard", date)?.unwrap_or_default();
        Ok(wire.into())
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Serialize)]
struct CreateRequest {
    action: &'static str,
    #[serde(flatten)]
    reservation: WireReservation,
}

#[derive(Debug, Serialize)]
struct ConfirmRequest<'a> {
    action: &'static str,
    id: &'a ReservationId,
    email: &'a str,
    codigo_confirmacao: &'a str,
    confirmado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum WireStatus {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "CONFIRMADO")]
    Confirmed,
    #[serde(rename = "CANCELADO")]
    Cancelled,
}

impl From<WireStatus> for ReservationStatus {
    fn from(status: WireStatus) -> Self {
        match status {
            WireStatus::Pending => Self::Pending,
            WireStatus::Confirmed => Self::Confirmed,
            WireStatus::Cancelled => Self::Cancelled,
        }
    }
}

/// Spreadsheet-backed endpoints hand back numbers where text was written
/// and the other way round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s,
        };
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireReservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ReservationId>,
    data: String,
    hora: String,
    nome: String,
    telefone: String,
    qtd_pessoas: Loose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    observacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_pix: Option<WireStatus>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    valor: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirmado_em: Option<Loose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirmado_por: Option<Loose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    codigo_confirmacao: Option<Loose>,
}

impl From<&NewReservation> for WireReservation {
    fn from(new: &NewReservation) -> Self {
        Self {
            id: None,
            data: new.date().format("%Y-%m-%d").to_string(),
            hora: new.time().format("%H:%M").to_string(),
            nome: new.customer_name().to_string(),
            telefone: new.phone().to_string(),
            qtd_pessoas: Loose::Int(i64::from(new.party_size())),
            observacao: new.note().map(str::to_string),
            status_pix: Some(WireStatus::Pending),
            valor: new.amount_due(),
            confirmado_em: None,
            confirmado_por: None,
            codigo_confirmacao: None,
        }
    }
}

impl WireReservation {
    fn into_reservation(self, action: &str) -> Result<Reservation> {
        let malformed = |details: String| Error::MalformedResponse {
            action: action.to_string(),
            details,
        };

        let id = self
            .id
            .ok_or_else(|| malformed("reservation without id".into()))?;
        let date = parse_date("data", &self.data).map_err(|e| malformed(e.to_string()))?;
        let time = parse_time("hora", &self.hora).map_err(|e| malformed(e.to_string()))?;
        let party_size = self
            .qtd_pessoas
            .into_text()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| malformed(format!("reservation {id} has no valid qtd_pessoas")))?;

        let confirmation = match (
            self.confirmado_em.and_then(Loose::into_text),
            self.confirmado_por.and_then(Loose::into_text),
            self.codigo_confirmacao.and_then(Loose::into_text),
        ) {
            (Some(at), Some(by), Some(code)) => {
                let at = DateTime::parse_from_rfc3339(&at)
                    .map_err(|e| malformed(format!("confirmado_em '{at}': {e}")))?
                    .with_timezone(&Utc);
                let code = ConfirmationCode::parse(&code).map_err(|e| malformed(e.to_string()))?;
                Some(Confirmation::new(by, code, at).map_err(|e| malformed(e.to_string()))?)
            }
            _ => None,
        };

        let status = self
            .status_pix
            .map_or(ReservationStatus::Pending, ReservationStatus::from);

        Reservation::builder(id, date, time)
            .customer_name(self.nome)
            .phone(self.telefone)
            .party_size(party_size)
            .note(self.observacao)
            .status(status)
            .amount_due(self.valor)
            .confirmation(confirmation)
            .build()
            .map_err(|e| malformed(e.to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireDashboard {
    total_reservas: usize,
    total_confirmadas: usize,
    valor_total_confirmado: Decimal,
    total_pendentes: usize,
}

impl From<WireDashboard> for DashboardData {
    fn from(wire: WireDashboard) -> Self {
        Self {
            total_reservations: wire.total_reservas,
            total_confirmed: wire.total_confirmadas,
            total_confirmed_revenue: wire.valor_total_confirmado,
            total_pending: wire.total_pendentes,
        }
    }
}
