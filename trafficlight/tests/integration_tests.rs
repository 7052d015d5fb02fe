// Test de integración del semáforo

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use trafficlight::{CycleConfig, Phase, TrafficLight};

fn fast_config(min_ms: u64, max_ms: u64, seed: u64) -> CycleConfig {
    CycleConfig {
        cycle_min_ms: min_ms,
        cycle_max_ms: max_ms,
        tick_ms: 1,
        seed: Some(seed),
    }
}

#[test]
fn test_phase_unknown_only_before_start() {
    let light = TrafficLight::with_config(fast_config(30, 60, 1));
    assert_eq!(light.current_phase(), Phase::Unknown);

    light.start();

    // esperar a que el hilo de ciclo entre al estado inicial
    let deadline = Instant::now() + Duration::from_secs(2);
    while light.current_phase() == Phase::Unknown {
        assert!(Instant::now() < deadline, "el ciclo nunca salió de Unknown");
        thread::sleep(Duration::from_millis(1));
    }

    // durante varias transiciones la fase nunca vuelve a Unknown
    for _ in 0..200 {
        let phase = light.current_phase();
        assert_ne!(phase, Phase::Unknown, "la fase volvió a Unknown");
        thread::sleep(Duration::from_millis(2));
    }

    light.stop();
    println!("✓ Unknown solo existe antes de start()");
}

#[test]
fn test_transitions_alternate_strictly() {
    let light = TrafficLight::with_config(fast_config(20, 40, 7));
    light.start();

    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(light.next_phase().expect("ciclo detenido antes de tiempo"));
    }
    light.stop();

    // el ciclo entra en Stop, asi que la primera publicada es Go
    assert_eq!(seen[0], Phase::Go, "la primera transición debe ser Go");
    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1], "dos transiciones seguidas iguales: {:?}", seen);
    }
    println!("✓ Transiciones observadas: {:?}", seen);
}

#[test]
fn test_intervals_within_range() {
    trafficlight::log::silence();

    let (min_ms, max_ms) = (60, 120);
    let light = TrafficLight::with_config(fast_config(min_ms, max_ms, 21));
    light.start();

    // la primera llegada marca el punto de partida de la medición
    light.next_phase().expect("sin primera transición");
    let mut previous = Instant::now();

    for _ in 0..5 {
        light.next_phase().expect("ciclo detenido antes de tiempo");
        let gap = previous.elapsed();
        previous = Instant::now();

        // holgura por scheduling: el sondeo es de 1ms pero el so puede atrasar
        assert!(
            gap + Duration::from_millis(20) >= Duration::from_millis(min_ms),
            "intervalo demasiado corto: {:?}",
            gap
        );
        assert!(
            gap <= Duration::from_millis(max_ms + 200),
            "intervalo demasiado largo: {:?}",
            gap
        );
    }

    light.stop();
    println!("✓ Intervalos dentro de [{}ms, {}ms]", min_ms, max_ms);
}

#[test]
fn test_wait_for_go_waits_for_green() {
    let light = TrafficLight::with_config(fast_config(50, 80, 3));
    let started = Instant::now();
    light.start();

    assert!(light.wait_for_go(), "wait_for_go no vio el verde");
    // el primer verde llega recién al cumplirse el primer intervalo
    assert!(
        started.elapsed() + Duration::from_millis(20) >= Duration::from_millis(50),
        "wait_for_go retornó antes del primer intervalo: {:?}",
        started.elapsed()
    );

    light.stop();
    println!("✓ wait_for_go retorna solo con Go");
}

#[test]
fn test_ten_concurrent_waiters_all_cross() {
    trafficlight::log::silence();

    let light = Arc::new(TrafficLight::with_config(fast_config(10, 25, 99)));
    light.start();

    let mut waiters = Vec::new();
    for _ in 0..10 {
        let light = Arc::clone(&light);
        waiters.push(thread::spawn(move || light.wait_for_go()));
    }

    // cada verde libera a un hilo; con ciclos cortos todos terminan
    for waiter in waiters {
        assert!(
            waiter.join().unwrap(),
            "un hilo quedó esperando o fue cancelado"
        );
    }

    light.stop();
    println!("✓ 10 hilos concurrentes cruzaron sin deadlock");
}

#[test]
fn test_stop_wakes_blocked_waiters() {
    // intervalos largos: ninguna transición va a ocurrir durante el test
    let light = Arc::new(TrafficLight::with_config(fast_config(5000, 6000, 5)));
    light.start();

    let mut waiters = Vec::new();
    for _ in 0..3 {
        let light = Arc::clone(&light);
        waiters.push(thread::spawn(move || light.wait_for_go()));
    }

    thread::sleep(Duration::from_millis(100));
    light.stop();

    for waiter in waiters {
        assert!(
            !waiter.join().unwrap(),
            "el hilo reportó verde después del stop"
        );
    }
    println!("✓ stop() despierta a los hilos bloqueados");
}

#[test]
fn test_wait_without_start_cancelled_by_stop() {
    // sin start() nunca se publica una fase; la espera solo termina con stop
    let light = Arc::new(TrafficLight::new());
    let light_clone = Arc::clone(&light);
    let waiter = thread::spawn(move || light_clone.wait_for_go());

    thread::sleep(Duration::from_millis(50));
    light.stop();

    assert!(!waiter.join().unwrap());
    assert_eq!(light.current_phase(), Phase::Unknown);
    println!("✓ La espera sin start() es cancelable");
}

#[test]
fn test_repeated_start_does_not_duplicate_cycle() {
    let light = TrafficLight::with_config(fast_config(20, 40, 11));
    light.start();
    light.start();

    // con un solo ciclo las transiciones siguen alternando
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(light.next_phase().expect("ciclo detenido antes de tiempo"));
    }
    for pair in seen.windows(2) {
        assert_ne!(
            pair[0], pair[1],
            "un segundo ciclo duplicó transiciones: {:?}",
            seen
        );
    }

    light.stop();
    println!("✓ start() repetido es inofensivo");
}
