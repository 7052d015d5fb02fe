// modulo raiz del semaforo
// separa el modelo de fases, la configuracion y el controlador del ciclo

pub mod config;
pub mod log;
pub mod model;
pub mod signal;

// reexports comodos
pub use config::CycleConfig;
pub use model::Phase;
pub use signal::TrafficLight;
