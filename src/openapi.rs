// OpenAPI documentation
//
// Aggregates all route annotations and schemas into a single spec,
// served by Swagger UI at /swagger-ui.

use utoipa::OpenApi;

use crate::api;
use crate::domain::Evento;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::eventos::list_eventos,
        api::eventos::create_evento,
        api::eventos::update_evento,
        api::eventos::delete_evento,
        api::eventos::copiar_eventos,
    ),
    components(schemas(
        Evento,
        api::eventos::CreateEventoRequest,
        api::eventos::UpdateEventoRequest,
        api::eventos::CopiarEventosRequest,
        api::ErrorResponse,
    )),
    tags(
        (name = "eventos", description = "Calendar events: CRUD and weekly copy")
    ),
    info(
        title = "Calendario API",
        description = "Personal weekly calendar with event management",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_includes_all_evento_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.contains(&&"/api/eventos".to_string()));
        assert!(paths.contains(&&"/api/eventos/{id}".to_string()));
        assert!(paths.contains(&&"/api/eventos/copiar".to_string()));
    }
}
