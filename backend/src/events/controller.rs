use actix_web::{get, web, HttpResponse};
use log::error;

use crate::error::ApiError;
use crate::events::repository::{EventCatalog, InMemoryCatalog};

pub async fn list_events_handler_impl<C>(catalog: web::Data<C>) -> Result<HttpResponse, ApiError>
where
    C: EventCatalog + 'static,
{
    let events = catalog.list().await.map_err(|e| {
        error!("Failed to list events: {}", e);
        ApiError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(events))
}

#[get("/events")]
pub async fn list_events_handler(
    catalog: web::Data<InMemoryCatalog>,
) -> Result<HttpResponse, ApiError> {
    list_events_handler_impl::<InMemoryCatalog>(catalog).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(list_events_handler));
}
