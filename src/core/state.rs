//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository, il servizio hotel e la configurazione condivisa
//! necessaria per gestire le richieste.

use crate::repositories::Repositories;
use crate::services::HotelService;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Sorgenti dati (MySQL in produzione, in memoria nei test)
    pub repositories: Repositories,

    /// Controllo del diritto all'alloggio + elenco hotel/camere
    pub hotels: HotelService,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState costruendo il servizio hotel
    /// sopra i repository forniti.
    ///
    /// # Arguments
    /// * `repositories` - Repository condivisi (vedi `Repositories::mysql` e `Repositories::shared`)
    /// * `jwt_secret` - Chiave segreta per la verifica dei token JWT
    pub fn new(repositories: Repositories, jwt_secret: String) -> Self {
        Self {
            hotels: HotelService::from_repositories(&repositories),
            repositories,
            jwt_secret,
        }
    }
}
