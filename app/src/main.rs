#![no_std]
#![no_main]

use board::xh32s::BOARD;
use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_embassy::main;
use hardware::{initialize_backlight, initialize_display, initialize_touch, DisplayPeripherals};
use log::{info, warn};
use touch_task::touch_task;

mod hardware;
mod touch_task;

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger_from_env();

    // Initialize peripherals
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);
    info!("Embassy initialized!");

    if let Err(e) = BOARD.validate() {
        panic!("{} board configuration: {e}", BOARD.name);
    }
    for assignment in BOARD.strapping_pins() {
        if let Some(pin) = assignment.pin {
            warn!("{} is on strapping pin {pin}", assignment.role);
        }
    }
    info!("{} configuration valid on {}", BOARD.name, BOARD.platform.name);

    let p = DisplayPeripherals {
        mosi: peripherals.GPIO13,
        sclk: peripherals.GPIO14,
        cs: peripherals.GPIO15,
        dc: peripherals.GPIO2,
        spi: peripherals.SPI2,
    };
    let mut display = initialize_display(p, &BOARD.display);
    display
        .clear(Rgb565::BLACK)
        .expect("Failed to clear display");

    let _backlight = initialize_backlight(peripherals.GPIO27, &BOARD.display);
    info!("Backlight on");

    let (touch_cs, pen) = initialize_touch(peripherals.GPIO33, peripherals.GPIO36, &BOARD.touch);

    // TASK: log pen down/up edges
    spawner.spawn(touch_task(touch_cs, pen)).ok();

    loop {
        Timer::after_secs(60).await;
    }
}
