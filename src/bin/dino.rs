//! Dino runner on the badge: the TFT plays a 16x2 character LCD, the A
//! button jumps.

#![no_std]
#![no_main]

use defmt::{
    Debug2Format,
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use lcd_dino::*;

esp_bootloader_esp_idf::esp_app_desc!();

static BUTTON: ButtonLatch = ButtonLatch::new();

#[embassy_executor::task]
async fn button_task(button: &'static mut JumpButton) {
    info!("button task started");
    button.forward_presses(&BUTTON).await
}

/// Play the end-of-round frames, then close the round.
async fn play_game_over(game: &mut Game, lcd: &mut BadgeLcd, animation: GameOverAnimation) {
    for step in animation {
        if let Err(e) = step.frame.draw(lcd) {
            error!("game over frame failed: {}", Debug2Format(&e));
        }
        Timer::after(step.hold).await;
    }
    game.finish_round();
}

#[embassy_executor::task]
async fn game_task(lcd: &'static mut BadgeLcd, seed: u32) {
    info!("game task started, seed {=u32:#x}", seed);
    if let Err(e) = register_glyphs(lcd) {
        error!("glyph upload failed: {}", Debug2Format(&e));
    }

    let mut game = Game::new(seed);
    loop {
        if let Err(e) = game.tick(&BUTTON, lcd) {
            error!("tick draw failed: {}", Debug2Format(&e));
        }
        if let Some(animation) = game.game_over_animation() {
            play_game_over(&mut game, lcd, animation).await;
            continue;
        }
        Timer::after(config::GAME_SPEED).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = lcd_dino::init();
    let resources = split_resources!(peripherals);

    // esp-rtos takes its scheduler and timer queue allocations from here.
    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let seed = random_seed();

    let mut screen: Screen<'static> = resources.display.into();
    screen.clear(Rgb565::BLACK).unwrap();
    let lcd = mk_static!(BadgeLcd, CharLcd::new(screen));
    let backlight = mk_static!(Backlight, resources.backlight.into());
    let button = mk_static!(JumpButton, resources.button.into());

    spawner.must_spawn(game_task(lcd, seed));
    spawner.must_spawn(button_task(button));
    backlight.on();

    loop {
        Timer::after(embassy_time::Duration::from_secs(600)).await;
    }
}
