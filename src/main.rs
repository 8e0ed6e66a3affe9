#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rp_pico::hal::rtc::{DateTime, DayOfWeek};
use rtic::app;

const XTAL_FREQ_HZ: u32 = 12_000_000;
const SAMPLE_PERIOD_US: u32 = 1_000_000;
const LOG_CAPACITY: usize = 64;
/// Longest record is `23:59:59,65535`.
const CSV_LEN: usize = 16;
const DISPLAY_INTENSITY: u8 = 0x0;

/// Loaded into the RTC at boot. The on-chip RTC has no battery backup.
const INITIAL_DATE: DateTime = DateTime {
    year: 2014,
    month: 8,
    day: 1,
    day_of_week: DayOfWeek::Friday,
    hour: 12,
    minute: 0,
    second: 0,
};

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use super::*;
    use embedded_hal::adc::OneShot;
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use hive_rtc::display::{prepare_buffer, DEVICES};
    use hive_rtc::sample::{Sample, SampleLog};
    use hive_rtc::TimeOfDay;
    use max7219::MAX7219;
    use rp_pico::hal::{
        adc::{Adc, TempSense},
        clocks::{init_clocks_and_plls, Clock},
        fugit::{ExtU32, RateExtU32},
        gpio::{bank0::Gpio15, FunctionSio, Interrupt, Pin, PullUp, SioInput},
        rtc::RealTimeClock,
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };

    type Spi0 = Spi<rp_pico::hal::spi::Enabled, rp_pico::hal::pac::SPI0, (
        Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>
    )>;
    type CsPin = Pin<rp_pico::hal::gpio::bank0::Gpio17, FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>;
    type LedPin = Pin<rp_pico::hal::gpio::bank0::Gpio25, FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>;
    type DisplayType = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;

    #[shared]
    struct Shared {
        log: SampleLog<LOG_CAPACITY>,
    }

    #[local]
    struct Local {
        alarm: Alarm0,
        led: LedPin,
        rtc: RealTimeClock,
        adc: Adc,
        temp_sense: TempSense,
        button: Pin<Gpio15, FunctionSio<SioInput>, PullUp>,
        display: DisplayType,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        alarm.schedule(SAMPLE_PERIOD_US.micros()).unwrap();
        alarm.enable_interrupt();

        let rtc = RealTimeClock::new(pac.RTC, clocks.rtc_clock, &mut pac.RESETS, INITIAL_DATE).unwrap();
        defmt::debug!("RTC started");

        let mut adc = Adc::new(pac.ADC, &mut pac.RESETS);
        let temp_sense = adc.take_temp_sensor().unwrap();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let button = pins.gpio15.into_pull_up_input();
        button.set_interrupt_enabled(Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            2_000_000u32.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut display = MAX7219::from_spi_cs(DEVICES, spi, cs).unwrap();
        display.power_on().unwrap();
        for i in 0..DEVICES {
            display.set_intensity(i, DISPLAY_INTENSITY).unwrap();
            display.clear_display(i).unwrap();
        }
        defmt::debug!("display ready");

        (
            Shared {
                log: SampleLog::new(),
            },
            Local {
                alarm,
                led,
                rtc,
                adc,
                temp_sense,
                button,
                display,
            },
            init::Monotonics(),
        )
    }

    /// Reads the RTC and the temperature sensor once per period.
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [log], local = [alarm, led, rtc, adc, temp_sense])]
    fn take_sample(mut ctx: take_sample::Context) {
        ctx.local.alarm.clear_interrupt();
        if ctx.local.alarm.schedule(SAMPLE_PERIOD_US.micros()).is_err() {
            defmt::error!("failed to schedule next sample");
        }

        ctx.local.led.toggle().ok();

        let now = match ctx.local.rtc.now() {
            Ok(now) => now,
            Err(_) => {
                defmt::warn!("RTC not running, sample skipped");
                return;
            }
        };
        let time = match TimeOfDay::new(now.hour, now.minute, now.second) {
            Ok(time) => time,
            Err(e) => {
                defmt::warn!("discarding RTC reading: {}", e);
                return;
            }
        };

        let raw: Result<u16, _> = ctx.local.adc.read(ctx.local.temp_sense);
        let raw = match raw {
            Ok(raw) => raw,
            Err(_) => {
                defmt::warn!("ADC read failed at {}", time);
                return;
            }
        };

        let sample = Sample::new(time, raw);
        ctx.shared.log.lock(|log| log.push(sample));

        let mut line = [0u8; CSV_LEN];
        match sample.write_csv(&mut line) {
            Ok(csv) => defmt::info!("{=str}", csv),
            Err(_) => defmt::warn!("record longer than {=usize} bytes", CSV_LEN),
        }

        update_display::spawn(time).ok();
    }

    /// Button press: print every buffered sample and start a fresh log.
    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [log], local = [button])]
    fn dump_log(mut ctx: dump_log::Context) {
        let button = ctx.local.button;
        button.set_interrupt_enabled(Interrupt::EdgeLow, false);
        button.clear_interrupt(Interrupt::EdgeLow);

        ctx.shared.log.lock(|log| {
            defmt::info!(
                "dumping {=usize} samples, {=u32} dropped",
                log.len(),
                log.dropped()
            );
            let mut line = [0u8; CSV_LEN];
            for sample in log.iter() {
                if let Ok(csv) = sample.write_csv(&mut line) {
                    defmt::info!("{=str}", csv);
                }
            }
            log.clear();
        });

        // drop edges that bounced in while dumping
        button.clear_interrupt(Interrupt::EdgeLow);
        button.set_interrupt_enabled(Interrupt::EdgeLow, true);
    }

    #[task(local = [display])]
    fn update_display(ctx: update_display::Context, time: TimeOfDay) {
        let buffers = prepare_buffer(&time);

        let display = ctx.local.display;
        for (dev_idx, buffer) in buffers.iter().enumerate() {
            if display.write_raw(dev_idx, buffer).is_err() {
                defmt::warn!("display write failed on device {=usize}", dev_idx);
                return;
            }
        }
    }
}
