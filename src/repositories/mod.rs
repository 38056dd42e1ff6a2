//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le letture di database per una specifica entità; il servizio
//! hotel non scrive mai nulla.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query usano sqlx::query_as::<_, Entity>(...) con #[derive(sqlx::FromRow)]
   invece di query_as! : il controllo dello schema avviene a runtime, così il crate
   compila anche senza un database raggiungibile (DATABASE_URL non serve in build).
   Numero di righe -> metodo:
   Zero or One  .fetch_optional(...).await  -> Option<Entity>
   Multiple     .fetch_all(...).await       -> Vec<Entity>
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod enrollment;
pub mod hotel;
pub mod memory;
pub mod payment;
pub mod session;
pub mod ticket;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{
    EnrollmentReader, HotelReader, PaymentReader, RepositoryError, SessionReader, TicketReader,
};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use enrollment::EnrollmentRepository;
pub use hotel::HotelRepository;
pub use memory::InMemoryStore;
pub use payment::PaymentRepository;
pub use session::SessionRepository;
pub use ticket::TicketRepository;

use sqlx::MySqlPool;
use std::sync::Arc;

/// Handle condivisi verso tutte le sorgenti dati usate dal servizio
#[derive(Clone)]
pub struct Repositories {
    pub hotels: Arc<dyn HotelReader>,
    pub enrollments: Arc<dyn EnrollmentReader>,
    pub tickets: Arc<dyn TicketReader>,
    pub payments: Arc<dyn PaymentReader>,
    pub sessions: Arc<dyn SessionReader>,
}

impl Repositories {
    /// Crea i repository MySQL condividendo lo stesso pool di connessioni
    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            hotels: Arc::new(HotelRepository::new(pool.clone())),
            enrollments: Arc::new(EnrollmentRepository::new(pool.clone())),
            tickets: Arc::new(TicketRepository::new(pool.clone())),
            payments: Arc::new(PaymentRepository::new(pool.clone())),
            sessions: Arc::new(SessionRepository::new(pool)),
        }
    }

    /// Usa un'unica sorgente che implementa tutti i trait (es. `InMemoryStore`)
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: HotelReader + EnrollmentReader + TicketReader + PaymentReader + SessionReader + 'static,
    {
        Self {
            hotels: store.clone(),
            enrollments: store.clone(),
            tickets: store.clone(),
            payments: store.clone(),
            sessions: store,
        }
    }
}
