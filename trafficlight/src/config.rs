// configuracion de tiempos del ciclo

/// Parametros del ciclo del semaforo.
///
/// Los valores por defecto reproducen el comportamiento esperado en la
/// simulacion (fases de 4 a 6 segundos). Las pruebas inyectan rangos
/// cortos y una semilla fija para ser rapidas y deterministas.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// duracion minima de una fase, en ms (inclusivo)
    pub cycle_min_ms: u64,
    /// duracion maxima de una fase, en ms (inclusivo)
    pub cycle_max_ms: u64,
    /// paso de sondeo del bucle de ciclo, en ms
    pub tick_ms: u64,
    /// semilla fija del generador; None usa entropia del sistema
    pub seed: Option<u64>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            cycle_min_ms: 4000,
            cycle_max_ms: 6000,
            tick_ms: 1,
            seed: None,
        }
    }
}
