use crate::domain::{CreatedModel, CreatedReservation, Model, Reservation, Store};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest adapter for the remote store. One request per operation, no
/// retry; any non-2xx response becomes `RequestFailed` carrying the
/// response body text. Deletes follow the same contract as everything
/// else.
#[derive(Debug, Clone)]
pub struct HttpStore {
    base_url: String,
    client: Client,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.to_string()
        } else {
            body
        };
        Err(AppError::RequestFailed { message })
    }
}

#[async_trait]
impl Store for HttpStore {
    async fn list_models(&self) -> Result<Vec<Model>> {
        tracing::debug!("GET /api/models");
        let response = self.client.get(self.endpoint("/api/models")).send().await?;
        let models = Self::ensure_success(response).await?.json().await?;
        Ok(models)
    }

    async fn create_model(&self, draft: &Model) -> Result<CreatedModel> {
        tracing::debug!(name = %draft.name, "POST /api/models");
        let response = self
            .client
            .post(self.endpoint("/api/models"))
            .json(draft)
            .send()
            .await?;
        let created = Self::ensure_success(response).await?.json().await?;
        Ok(created)
    }

    async fn delete_model(&self, id: &str) -> Result<()> {
        tracing::debug!(id, "DELETE /api/models");
        let response = self
            .client
            .delete(self.endpoint("/api/models"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn list_reservations(&self, date: Option<&str>) -> Result<Vec<Reservation>> {
        tracing::debug!(?date, "GET /api/reservas");
        let mut request = self.client.get(self.endpoint("/api/reservas"));
        if let Some(date) = date {
            request = request.query(&[("fecha", date)]);
        }
        let response = request.send().await?;
        let reservations = Self::ensure_success(response).await?.json().await?;
        Ok(reservations)
    }

    async fn create_reservation(&self, draft: &Reservation) -> Result<CreatedReservation> {
        tracing::debug!(date = %draft.date, model_id = %draft.model_id, "POST /api/reservas");
        let response = self
            .client
            .post(self.endpoint("/api/reservas"))
            .json(draft)
            .send()
            .await?;
        let created = Self::ensure_success(response).await?.json().await?;
        Ok(created)
    }

    async fn delete_reservation(&self, id: &str) -> Result<()> {
        tracing::debug!(id, "DELETE /api/reservas");
        let response = self
            .client
            .delete(self.endpoint("/api/reservas"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn store(server: &MockServer) -> HttpStore {
        HttpStore::new(&server.base_url()).unwrap()
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(HttpStore::new("not a url").is_err());
        assert!(HttpStore::new("").is_err());
    }

    #[tokio::test]
    async fn list_models_maps_store_wire_names() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/models");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": "m1", "nombre": "Clásico", "stock_hombres": 10, "stock_mujeres": 8},
                    {"id": "m2", "nombre": "Huaso", "stock_hombres": 4, "stock_mujeres": 6}
                ]));
        });

        let models = store(&server).list_models().await.unwrap();

        mock.assert();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id.as_deref(), Some("m1"));
        assert_eq!(models[0].name, "Clásico");
        assert_eq!(models[1].stock_women, 6);
    }

    #[tokio::test]
    async fn create_model_posts_draft_and_returns_store_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/models")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "nombre": "Clásico",
                    "stock_hombres": 10,
                    "stock_mujeres": 10
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "m1"}));
        });

        let draft = Model::draft("Clásico", 10, 10);
        let created = store(&server).create_model(&draft).await.unwrap();

        mock.assert();
        assert_eq!(created.id, "m1");
    }

    #[tokio::test]
    async fn delete_model_sends_id_as_query_param() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/models").query_param("id", "m1");
            then.status(204);
        });

        store(&server).delete_model("m1").await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn delete_failure_surfaces_body_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/models");
            then.status(409).body("model has reservations");
        });

        let err = store(&server).delete_model("m1").await.unwrap_err();

        match err {
            AppError::RequestFailed { message } => {
                assert_eq!(message, "model has reservations");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_reservations_filters_by_fecha() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/reservas")
                .query_param("fecha", "2024-05-01");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{
                    "id": "r1",
                    "fecha": "2024-05-01",
                    "n_contacto": "Ana",
                    "nombre_colegio": "Colegio Norte",
                    "direccion": "Calle 1",
                    "tipo_baile": "Cueca",
                    "modelo_id": "m1",
                    "modelo_nombre": "Clásico",
                    "valor_arriendo": 12000,
                    "hombres": 3,
                    "mujeres": 2,
                    "valor_adicional": 0,
                    "total": 12000
                }]));
        });

        let reservations = store(&server)
            .list_reservations(Some("2024-05-01"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].model_name.as_deref(), Some("Clásico"));
        assert_eq!(reservations[0].total, Some(12000));
    }

    #[tokio::test]
    async fn list_reservations_without_date_sends_no_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/reservas");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let reservations = store(&server).list_reservations(None).await.unwrap();

        mock.assert();
        assert!(reservations.is_empty());
    }

    #[tokio::test]
    async fn create_reservation_error_body_becomes_the_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/reservas");
            then.status(400).body("duplicate");
        });

        let draft = Reservation {
            id: None,
            date: "2024-05-01".to_string(),
            contact: "Ana".to_string(),
            school: "Colegio Norte".to_string(),
            address: "Calle 1".to_string(),
            dance_type: "Cueca".to_string(),
            model_id: "m1".to_string(),
            model_name: Some("Clásico".to_string()),
            rental_price: 12000,
            men: 3,
            women: 2,
            additional_charge: 0,
            extras: None,
            show_time: None,
            delivery_fee: None,
            deposit: None,
            total: None,
        };
        let err = store(&server).create_reservation(&draft).await.unwrap_err();

        assert_eq!(err.user_friendly_message(), "duplicate");
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_the_status_line() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/models");
            then.status(500);
        });

        let err = store(&server).list_models().await.unwrap_err();

        match err {
            AppError::RequestFailed { message } => {
                assert!(message.contains("500"), "got: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
