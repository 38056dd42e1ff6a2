//! Integration tests per gli endpoints degli hotel
//!
//! Test per:
//! - GET /hotels
//! - GET /hotels/{hotel_id}
//!
//! Ogni test usa un `InMemoryStore` nuovo, popolato con le factory di `common`.

mod common;

#[cfg(test)]
mod hotel_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use hotels_server::dtos::{HotelDTO, RoomDTO};
    use hotels_server::entities::TicketStatus;
    use serde_json::{Value, json};

    // ============================================================
    // Test per GET /hotels - autenticazione
    // ============================================================

    #[tokio::test]
    async fn test_list_hotels_without_token() {
        let (_store, server) = setup();
        let response = server.get("/hotels").await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_list_hotels_with_invalid_token() {
        let (_store, server) = setup();
        let response = server.get("/hotels").authorization_bearer("lorem").await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_list_hotels_without_session() {
        let (_store, server) = setup();
        let token = create_test_jwt(1);
        let response = server.get("/hotels").authorization_bearer(&token).await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_list_hotels_with_session_of_another_user() {
        let (store, server) = setup();
        let token = create_test_jwt(1);
        store.add_session(2, &token);
        let response = server.get("/hotels").authorization_bearer(&token).await;
        response.assert_status_unauthorized();
    }

    // ============================================================
    // Test per GET /hotels - diritto all'alloggio
    // ============================================================

    #[tokio::test]
    async fn test_list_hotels_without_enrollment() {
        let (store, server) = setup();
        let user = create_user_with_session(&store, 1);
        create_hotel(&store);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_hotels_without_ticket() {
        let (store, server) = setup();
        let user = create_user_with_session(&store, 1);
        store.add_enrollment(user.id);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_hotels_with_reserved_ticket() {
        let (store, server) = setup();
        let user = create_user_with_ticket(&store, 1, false, true, TicketStatus::Reserved);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        assert_eq!(response.status_code(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn test_list_hotels_with_paid_ticket_but_no_payment() {
        let (store, server) = setup();
        let user = create_user_with_session(&store, 1);
        let enrollment = store.add_enrollment(user.id);
        let ticket_type = store.add_ticket_type(false, true);
        store.add_ticket(enrollment.id, ticket_type.id, TicketStatus::Paid);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        assert_eq!(response.status_code(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn test_list_hotels_with_ticket_without_hotel() {
        let (store, server) = setup();
        let user = create_user_with_ticket(&store, 1, false, false, TicketStatus::Paid);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_list_hotels_with_remote_ticket() {
        let (store, server) = setup();
        let user = create_user_with_ticket(&store, 1, true, true, TicketStatus::Paid);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    // ============================================================
    // Test per GET /hotels - successo
    // ============================================================

    #[tokio::test]
    async fn test_list_hotels_empty() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_list_hotels_success() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);
        let hotel = create_hotel(&store);
        create_room(&store, hotel.id);

        let response = server.get("/hotels").authorization_bearer(&user.token).await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body, json!([HotelDTO::from(hotel)]));
        // le camere non compaiono nell'elenco
        assert!(body[0].get("Rooms").is_none());
    }

    #[tokio::test]
    async fn test_list_hotels_is_idempotent() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);
        create_hotel(&store);
        store.add_hotel("Driven Palace", "https://images.example.com/palace.png");

        let first = server.get("/hotels").authorization_bearer(&user.token).await;
        let second = server.get("/hotels").authorization_bearer(&user.token).await;
        assert_eq!(first.json::<Value>(), second.json::<Value>());
        assert_eq!(first.json::<Value>().as_array().map(Vec::len), Some(2));
    }

    // ============================================================
    // Test per GET /hotels/{hotel_id}
    // ============================================================

    #[tokio::test]
    async fn test_get_hotel_rooms_without_token() {
        let (_store, server) = setup();
        let response = server.get("/hotels/2").await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_without_session() {
        let (_store, server) = setup();
        let token = create_test_jwt(1);
        let response = server.get("/hotels/1").authorization_bearer(&token).await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_without_enrollment_checks_ticket_first() {
        let (store, server) = setup();
        let user = create_user_with_session(&store, 1);

        // id malformato, ma il controllo del ticket viene prima
        let response = server.get("/hotels/abc").authorization_bearer(&user.token).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_with_invalid_utf8_id_checks_ticket_first() {
        let (store, server) = setup();
        let user = create_user_with_session(&store, 1);

        // %FF non è UTF-8: il path non si estrae, ma l'iscrizione mancante vince
        let response = server.get("/hotels/%FF").authorization_bearer(&user.token).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_with_invalid_utf8_id() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);

        let response = server.get("/hotels/%FF").authorization_bearer(&user.token).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], json!("Invalid hotel id"));
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_with_reserved_ticket() {
        let (store, server) = setup();
        let user = create_user_with_ticket(&store, 1, false, true, TicketStatus::Reserved);
        let hotel = create_hotel(&store);

        let response = server
            .get(&format!("/hotels/{}", hotel.id))
            .authorization_bearer(&user.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_with_ticket_without_hotel() {
        let (store, server) = setup();
        let user = create_user_with_ticket(&store, 1, false, false, TicketStatus::Paid);
        let hotel = create_hotel(&store);

        let response = server
            .get(&format!("/hotels/{}", hotel.id))
            .authorization_bearer(&user.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_with_malformed_id() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);

        for raw in ["abc", "0", "-1", "1.5"] {
            let response = server
                .get(&format!("/hotels/{raw}"))
                .authorization_bearer(&user.token)
                .await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "id '{raw}'");
        }
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_not_found() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);

        let response = server.get("/hotels/999").authorization_bearer(&user.token).await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_without_rooms() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);
        let hotel = create_hotel(&store);

        let response = server
            .get(&format!("/hotels/{}", hotel.id))
            .authorization_bearer(&user.token)
            .await;
        response.assert_status_ok();

        let mut expected = serde_json::to_value(HotelDTO::from(hotel)).unwrap();
        expected["Rooms"] = json!([]);
        assert_eq!(response.json::<Value>(), expected);
    }

    #[tokio::test]
    async fn test_get_hotel_rooms_success() {
        let (store, server) = setup();
        let user = create_entitled_user(&store, 1);
        let hotel = create_hotel(&store);
        let room = create_room(&store, hotel.id);
        // camera di un altro hotel, non deve comparire
        let other = store.add_hotel("Driven Palace", "https://images.example.com/palace.png");
        create_room(&store, other.id);

        let response = server
            .get(&format!("/hotels/{}", hotel.id))
            .authorization_bearer(&user.token)
            .await;
        response.assert_status_ok();

        let mut expected = serde_json::to_value(HotelDTO::from(hotel)).unwrap();
        expected["Rooms"] = json!([RoomDTO::from(room)]);
        assert_eq!(response.json::<Value>(), expected);
    }

    // ============================================================
    // Health check
    // ============================================================

    #[tokio::test]
    async fn test_root_is_public() {
        let (_store, server) = setup();
        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_text("Server is running!");
    }
}
