use httpmock::prelude::*;
use reservas_trajes::{HttpStore, Model, Reservation, Session, Store};

fn reservation_draft(date: &str, model_id: &str, men: u32, women: u32) -> Reservation {
    Reservation {
        id: None,
        date: date.to_string(),
        contact: "Ana".to_string(),
        school: "Colegio Norte".to_string(),
        address: "Av. Siempre Viva 123".to_string(),
        dance_type: "Cueca".to_string(),
        model_id: model_id.to_string(),
        model_name: Some("Clásico".to_string()),
        rental_price: 12000,
        men,
        women,
        additional_charge: 0,
        extras: None,
        show_time: None,
        delivery_fee: None,
        deposit: None,
        total: None,
    }
}

#[tokio::test]
async fn a_booking_reduces_availability_for_its_date_only() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/models");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "m1"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/reservas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "r1", "total": 12000}));
    });
    let other_day = server.mock(|when, then| {
        when.method(GET)
            .path("/api/reservas")
            .query_param("fecha", "2024-05-02");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let store = HttpStore::new(&server.base_url()).unwrap();
    let mut session = Session::new("2024-05-01".to_string());

    // Register the model; the session keeps the store-assigned id.
    let draft = Model::draft("Clásico", 10, 10);
    let created = store.create_model(&draft).await.unwrap();
    session.merge_created_model(draft, created.id);

    // Book 3 men and 2 women for 2024-05-01.
    let draft = reservation_draft("2024-05-01", "m1", 3, 2);
    let created = store.create_reservation(&draft).await.unwrap();
    session.merge_created_reservation(draft, created.id, created.total);

    let availability = session.availability();
    assert_eq!(availability.len(), 1);
    assert_eq!(availability[0].men, 7);
    assert_eq!(availability[0].women, 8);

    // Any other date shows full stock once its (empty) list is fetched.
    let generation = session.set_date("2024-05-02".to_string());
    let list = store.list_reservations(Some("2024-05-02")).await.unwrap();
    assert!(session.apply_reservations(generation, list));
    other_day.assert();

    let availability = session.availability();
    assert_eq!(availability[0].men, 10);
    assert_eq!(availability[0].women, 10);
}

#[tokio::test]
async fn same_day_bookings_for_one_model_stack_up() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/reservas")
            .query_param("fecha", "2024-05-01");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": "r1", "fecha": "2024-05-01", "n_contacto": "Ana",
                    "nombre_colegio": "Colegio Norte", "direccion": "Calle 1",
                    "tipo_baile": "Cueca", "modelo_id": "m1", "modelo_nombre": "Clásico",
                    "valor_arriendo": 12000, "hombres": 3, "mujeres": 0,
                    "valor_adicional": 0, "total": 12000
                },
                {
                    "id": "r2", "fecha": "2024-05-01", "n_contacto": "Luis",
                    "nombre_colegio": "Colegio Sur", "direccion": "Calle 2",
                    "tipo_baile": "Cueca", "modelo_id": "m1", "modelo_nombre": "Clásico",
                    "valor_arriendo": 12000, "hombres": 4, "mujeres": 0,
                    "valor_adicional": 0, "total": 12000
                }
            ]));
    });

    let store = HttpStore::new(&server.base_url()).unwrap();
    let mut session = Session::new("2024-05-01".to_string());
    session.set_models(vec![Model {
        id: Some("m1".to_string()),
        name: "Clásico".to_string(),
        stock_men: 10,
        stock_women: 10,
    }]);

    let generation = session.next_fetch_generation();
    let list = store.list_reservations(Some("2024-05-01")).await.unwrap();
    session.apply_reservations(generation, list);

    let availability = session.availability();
    assert_eq!(availability[0].men, 3);
    assert_eq!(availability[0].women, 10);
}

#[tokio::test]
async fn duplicate_rejection_leaves_the_session_unchanged() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/reservas");
        then.status(409).body("duplicate");
    });

    let store = HttpStore::new(&server.base_url()).unwrap();
    let mut session = Session::new("2024-05-01".to_string());
    session.set_models(vec![Model {
        id: Some("m1".to_string()),
        name: "Clásico".to_string(),
        stock_men: 10,
        stock_women: 10,
    }]);

    let draft = reservation_draft("2024-05-01", "m1", 3, 2);
    let err = store.create_reservation(&draft).await.unwrap_err();
    session.set_error(err.user_friendly_message());

    assert_eq!(session.last_error.as_deref(), Some("duplicate"));
    assert!(session.reservations.is_empty());
    assert_eq!(session.models.len(), 1);
}

#[tokio::test]
async fn deleting_the_only_booking_restores_full_stock_on_next_fetch() {
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/reservas")
            .query_param("id", "r1");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/reservas")
            .query_param("fecha", "2024-05-01");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let store = HttpStore::new(&server.base_url()).unwrap();
    let mut session = Session::new("2024-05-01".to_string());
    session.set_models(vec![Model {
        id: Some("m1".to_string()),
        name: "Clásico".to_string(),
        stock_men: 10,
        stock_women: 10,
    }]);
    let mut booked = reservation_draft("2024-05-01", "m1", 3, 2);
    booked.id = Some("r1".to_string());
    booked.total = Some(12000);
    let generation = session.next_fetch_generation();
    session.apply_reservations(generation, vec![booked]);
    assert_eq!(session.availability()[0].men, 7);

    store.delete_reservation("r1").await.unwrap();
    session.remove_reservation("r1");
    delete.assert();

    let generation = session.next_fetch_generation();
    let list = store.list_reservations(Some("2024-05-01")).await.unwrap();
    session.apply_reservations(generation, list);

    let availability = session.availability();
    assert_eq!(availability[0].men, 10);
    assert_eq!(availability[0].women, 10);
}
