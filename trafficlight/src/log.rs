// trafficlight/src/log.rs
// logger minimo redirigible, sin std::sync::Mutex; por defecto consola
// redirigir con set_logger(fn(&str)) o silenciar con silence() antes de
// arrancar los hilos de la simulacion

use core::sync::atomic::{AtomicPtr, Ordering};

type LogFn = fn(&str);

fn console_log(s: &str) {
    println!("{}", s);
}

fn discard_log(_s: &str) {}

// guarda un puntero a funcion; se asume que la redireccion ocurre antes
// del primer uso concurrente
static LOGGER_PTR: AtomicPtr<()> = AtomicPtr::new(console_log as *mut ());

#[inline]
pub fn set_logger(f: LogFn) {
    LOGGER_PTR.store(f as *mut (), Ordering::Relaxed);
}

/// descarta todo lo que se loguee; util en pruebas con muchos ciclos
#[inline]
pub fn silence() {
    set_logger(discard_log);
}

#[inline]
pub fn log_str(s: &str) {
    let p = LOGGER_PTR.load(Ordering::Relaxed);
    let f: LogFn = unsafe { core::mem::transmute(p) };
    f(s);
}

#[macro_export]
macro_rules! tl_log {
    ($($arg:tt)*) => {{
        $crate::log::log_str(&format!($($arg)*));
    }};
}
