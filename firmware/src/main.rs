/// superloop firmware for the I/O kit: led blinking, button polling and heartbeat multiplexed on a single loop

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use core::cell::Cell;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    time::Instant,
};
use esp_println as _;
use log::*;

use jtask::{Clock, Debounce, FnClock, Registry};


esp_bootloader_esp_idf::esp_app_desc!();

/// led half periods in microseconds, depending on the button
const SLOW_BLINK: u32 = 500_000;
const FAST_BLINK: u32 = 100_000;
/// time the button level must hold before being accepted
const DEBOUNCE: u32 = 20_000;

#[esp_hal::main]
fn main() -> ! {
    // init hardware
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // 32bit microsecond counter, wrapping every ~71 minutes like arduino's micros()
    let clock = FnClock(|| Instant::now().duration_since_epoch().as_micros() as u32);

    let mut led = Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default());
    let button = Input::new(peripherals.GPIO0, InputConfig::default().with_pull(Pull::Up));
    let mut button = Debounce::new(button, DEBOUNCE, clock.now()).unwrap();

    // tasks
    let pressed = Cell::new(false);
    let uptime = Cell::new(0u32);
    let mut blink = || {
        led.toggle();
    };
    let mut poll_button = || {
        if let Ok(Some(level)) = button.update(clock.now()) {
            // pulled up, pressing pulls low
            pressed.set(!level);
            info!("button {}", if level {"released"} else {"pressed"});
        }
    };
    let mut heartbeat = || {
        uptime.set(uptime.get() + 1);
        info!("alive since {} s", uptime.get());
    };

    info!("setting up tasks");
    let mut registry: Registry<_, &mut dyn FnMut(), 3> = Registry::new(&clock);
    let blink_task = registry.register(&mut blink, SLOW_BLINK).unwrap();
    registry.register(&mut poll_button, 1_000).unwrap();
    registry.register(&mut heartbeat, 1_000_000).unwrap();
    info!("init done, {} tasks", registry.len());

    let mut fast = false;
    loop {
        registry.service();
        // blink faster while the button is held
        if pressed.get() != fast {
            fast = pressed.get();
            let period = if fast {FAST_BLINK} else {SLOW_BLINK};
            if let Err(err) = registry.reschedule(blink_task, period) {
                error!("{}", err);
            }
        }
    }
}
