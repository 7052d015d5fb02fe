// semaforo con ciclo autonomo de fases en un hilo de fondo

use crate::config::CycleConfig;
use crate::model::Phase;
use crate::tl_log;
use handoff::HandoffQueue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// estado compartido entre el semaforo y su hilo de ciclo
struct SignalShared {
    /// fase actual; solo el hilo de ciclo la escribe, cualquiera la lee
    phase: AtomicU8,
    /// bandera de cancelacion del ciclo
    running: AtomicBool,
    /// canal de notificaciones de cambio de fase; no es el estado
    /// autoritativo, para eso esta `phase`
    queue: HandoffQueue<Phase>,
}

/// Semaforo que alterna Stop y Go en un hilo de fondo, con intervalos
/// aleatorios dentro del rango configurado.
///
/// Los consumidores pueden esperar el verde con `wait_for_go` o
/// consultar la fase al instante con `current_phase`. Cada notificacion
/// de fase se entrega a un solo receptor: con varios hilos esperando a
/// la vez, cada uno cruza en algun verde posterior, no todos en el
/// primero.
pub struct TrafficLight {
    shared: Arc<SignalShared>,
    config: CycleConfig,
    cycle_thread: Mutex<Option<JoinHandle<()>>>,
}

impl TrafficLight {
    /// Crea un semaforo en fase `Unknown` con la configuracion por defecto.
    pub fn new() -> Self {
        Self::with_config(CycleConfig::default())
    }

    pub fn with_config(config: CycleConfig) -> Self {
        assert!(
            config.cycle_min_ms <= config.cycle_max_ms,
            "rango de ciclo invalido: {} > {}",
            config.cycle_min_ms,
            config.cycle_max_ms
        );
        Self {
            shared: Arc::new(SignalShared {
                phase: AtomicU8::new(Phase::Unknown.as_u8()),
                running: AtomicBool::new(false),
                queue: HandoffQueue::new(),
            }),
            config,
            cycle_thread: Mutex::new(None),
        }
    }

    /// Arranca el hilo de ciclo. Una segunda llamada no hace nada.
    pub fn start(&self) {
        let mut slot = self.cycle_thread.lock().unwrap();
        if slot.is_some() {
            tl_log!("🚦 start() repetido ignorado, el ciclo ya corre");
            return;
        }
        self.shared.running.store(true, Ordering::SeqCst);
        let shared = Arc::clone(&self.shared);
        let config = self.config.clone();
        *slot = Some(thread::spawn(move || cycle_loop(&shared, &config)));
    }

    /// Fase actual, lectura consistente y sin bloquear.
    pub fn current_phase(&self) -> Phase {
        Phase::from_u8(self.shared.phase.load(Ordering::Acquire))
    }

    /// Bloquea hasta recibir una notificacion de `Go`, descartando las
    /// fases `Stop` intermedias.
    ///
    /// Retorna `false` si el semaforo se detuvo mientras esperaba. Si el
    /// ciclo nunca se arranco, la espera solo termina con `stop()`.
    pub fn wait_for_go(&self) -> bool {
        loop {
            match self.next_phase() {
                Some(Phase::Go) => return true,
                Some(_) => continue,
                None => return false,
            }
        }
    }

    /// Recibe exactamente una notificacion de cambio de fase, en el
    /// orden en que se publicaron. `None` despues de `stop()`.
    pub fn next_phase(&self) -> Option<Phase> {
        self.shared.queue.receive()
    }

    /// Detiene el ciclo, despierta a todos los que esperan y une el
    /// hilo de fondo. Idempotente; tambien corre en el `Drop`.
    pub fn stop(&self) {
        self.shared.running.store(false, Ordering::SeqCst);
        self.shared.queue.close();
        let handle = self.cycle_thread.lock().unwrap().take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TrafficLight {
    fn drop(&mut self) {
        self.stop();
    }
}

/// bucle que corre en el hilo de fondo: sondea cada tick y alterna la
/// fase cuando el intervalo aleatorio vigente se cumple
fn cycle_loop(shared: &SignalShared, config: &CycleConfig) {
    // generador propio de la instancia, nunca compartido entre semaforos
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    // rango validado en with_config
    let cycle_dist = Uniform::new_inclusive(config.cycle_min_ms, config.cycle_max_ms)
        .expect("rango de ciclo invalido");

    // el ciclo entra en Stop; la primera transicion publicada es Go
    let mut phase = Phase::Stop;
    shared.phase.store(phase.as_u8(), Ordering::Release);

    let mut cycle_ms: u64 = cycle_dist.sample(&mut rng);
    let mut last_change = Instant::now();
    let tick = Duration::from_millis(config.tick_ms);

    while shared.running.load(Ordering::SeqCst) {
        if last_change.elapsed() >= Duration::from_millis(cycle_ms) {
            phase = phase.flipped();
            shared.phase.store(phase.as_u8(), Ordering::Release);
            shared.queue.send(phase);

            // cada transicion sortea un intervalo nuevo
            cycle_ms = cycle_dist.sample(&mut rng);
            last_change = Instant::now();
            tl_log!("🚦 Semáforo cambió a {:?}, próximo cambio en {}ms", phase, cycle_ms);
        }
        thread::sleep(tick);
    }
}
