// Services layer for business logic
// Services own defaults and the copy expansion, calling storage directly

pub mod evento;

pub use evento::{CopiarEventos, EventoService, NuevoEvento};
