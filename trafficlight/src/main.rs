// demo del semaforo: carros esperando el verde

use std::sync::Arc;
use std::thread;

use trafficlight::{CycleConfig, TrafficLight};

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║              Semáforo - Demo de Ciclo                      ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    // ciclos cortos para que la demo no tome minutos
    let config = CycleConfig {
        cycle_min_ms: 400,
        cycle_max_ms: 800,
        ..CycleConfig::default()
    };
    let light = Arc::new(TrafficLight::with_config(config));
    light.start();

    let mut cars = Vec::new();
    for id in 1..=4 {
        let light = Arc::clone(&light);
        cars.push(thread::spawn(move || {
            println!(
                "🚗 Carro-{} llegó al cruce (fase actual: {:?})",
                id,
                light.current_phase()
            );
            if light.wait_for_go() {
                println!("🚗 Carro-{} ✅ cruzando", id);
            } else {
                println!("🚗 Carro-{} 🚫 el semáforo se apagó", id);
            }
        }));
    }

    for car in cars {
        let _ = car.join();
    }

    light.stop();
    println!("\n✅ Demo finalizada (fase final: {:?})", light.current_phase());
}
