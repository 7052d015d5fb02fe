//! cola de handoff bloqueante entre hilos
//! cada valor enviado se entrega a exactamente un receive, en orden fifo

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// estado interno, siempre bajo el mutex
struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Cola FIFO no acotada con `receive` bloqueante.
///
/// `send` nunca bloquea y despierta a un receptor; `receive` bloquea
/// hasta que haya un valor disponible o la cola se cierre. El lock se
/// libera durante la espera (semantica de condvar), asi un productor
/// nunca puede quedar trabado contra un receptor bloqueado.
pub struct HandoffQueue<T> {
    inner: Mutex<Inner<T>>,
    available: Condvar,
}

impl<T> HandoffQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Agrega un valor al final de la cola y despierta a un receptor.
    /// Nunca bloquea. Si la cola ya fue cerrada el valor se descarta.
    pub fn send(&self, value: T) {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return;
        }
        inner.items.push_back(value);
        drop(inner);
        self.available.notify_one();
    }

    /// Saca el valor al frente de la cola, bloqueando hasta que exista.
    ///
    /// Retorna `None` cuando la cola fue cerrada y ya se drenaron los
    /// valores pendientes. Los despertares espurios del condvar se
    /// cubren re-chequeando el predicado en el loop.
    pub fn receive(&self) -> Option<T> {
        let mut inner = self.inner.lock().unwrap();
        loop {
            if let Some(value) = inner.items.pop_front() {
                return Some(value);
            }
            if inner.closed {
                return None;
            }
            inner = self.available.wait(inner).unwrap();
        }
    }

    /// Cierra la cola y despierta a todos los receptores bloqueados.
    /// Los valores que ya estaban encolados todavia se entregan.
    pub fn close(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;
        drop(inner);
        self.available.notify_all();
    }

    /// cantidad de valores pendientes
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for HandoffQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
