// fases del semaforo

/// Fase actual del semaforo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// valor previo al arranque; nunca se re-entra una vez iniciado el ciclo
    Unknown,
    Stop,
    Go,
}

impl Phase {
    /// Fase opuesta del ciclo Stop <-> Go.
    pub fn flipped(self) -> Phase {
        match self {
            Phase::Go => Phase::Stop,
            // desde Unknown el ciclo arranca igual que desde Stop
            _ => Phase::Go,
        }
    }

    // representacion compacta para guardar la fase en un AtomicU8
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Phase::Unknown => 0,
            Phase::Stop => 1,
            Phase::Go => 2,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Phase {
        match raw {
            1 => Phase::Stop,
            2 => Phase::Go,
            _ => Phase::Unknown,
        }
    }
}
