mod site;

use std::fs::File;
use std::process::ExitCode;
use std::time::Duration;

use menu_toggle::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// One scripted user interaction.
enum Step {
    Click(&'static str),
    CloseButton(&'static str),
    Key(&'static str, Key),
    Focus(&'static str),
    Resize(f64, f64),
    Frame(u64),
    TransitionEnd(&'static str),
}

const SCRIPT: &[Step] = &[
    Step::Click("burger-toggle"),
    Step::TransitionEnd("burger-menu"),
    Step::Key("products-trigger", Key::Down),
    Step::TransitionEnd("products-menu"),
    Step::Key("company-trigger", Key::Enter),
    Step::Focus("company-careers"),
    Step::Key("company-careers", Key::Escape),
    Step::Resize(390.0, 700.0),
    Step::Resize(390.0, 640.0),
    Step::Frame(16),
    Step::Click("search-trigger"),
    Step::Key("search-input", Key::Escape),
    Step::Click("burger-toggle"),
    Step::CloseButton("burger-menu"),
];

fn describe(step: &Step) -> String {
    match step {
        Step::Click(id) => format!("click {id}"),
        Step::CloseButton(panel) => format!("click close button of {panel}"),
        Step::Key(id, key) => format!("{key:?} on {id}"),
        Step::Focus(id) => format!("focus {id}"),
        Step::Resize(w, h) => format!("resize to {w}x{h}"),
        Step::Frame(ms) => format!("frame after {ms}ms"),
        Step::TransitionEnd(id) => format!("transitionend on {id}"),
    }
}

fn play(menu: &mut Menu<Document>, step: &Step) {
    match step {
        Step::Click(id) => {
            menu.handle_event(&Event::click(*id));
        }
        Step::CloseButton(panel) => {
            let close = menu.toggle(panel).and_then(|t| t.close_button.clone());
            match close {
                Some(close) => {
                    menu.handle_event(&Event::click(close));
                }
                None => log::warn!("{panel} has no close button"),
            }
        }
        Step::Key(id, key) => {
            menu.handle_event(&Event::key(*id, *key));
        }
        Step::Focus(id) => menu.dom_mut().focus(id),
        Step::Resize(width, height) => {
            menu.dom_mut().set_viewport(Viewport::new(*width, *height));
            menu.handle_event(&Event::Resize {
                width: *width,
                height: *height,
            });
        }
        Step::Frame(ms) => {
            let report = menu.run_frame(Duration::from_millis(*ms));
            for failure in &report.failures {
                eprintln!("  {} callback {} failed: {}", failure.kind.name(), failure.index, failure.message);
            }
        }
        Step::TransitionEnd(id) => {
            menu.handle_event(&Event::transition_end(*id));
        }
    }
}

fn print_state(menu: &Menu<Document>) {
    let open: Vec<_> = menu
        .toggle_ids()
        .into_iter()
        .filter(|id| menu.is_open(id))
        .collect();
    println!(
        "  open: [{}]  last open: {}  focus: {}",
        open.join(", "),
        menu.last_open().unwrap_or("-"),
        menu.dom().active_element().as_deref().unwrap_or("body"),
    );
    for id in &open {
        println!(
            "    {id}: height {}",
            menu.dom().style(id, "height").as_deref().unwrap_or("auto")
        );
    }
}

fn main() -> ExitCode {
    let log_file = File::create("menu-toggle-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = match std::env::args().nth(1) {
        Some(path) => match MenuConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => MenuConfig::default(),
    };

    let mut menu = Menu::with_config(site::build(), config);
    menu.handle_event(&Event::ContentLoaded);
    let toggles = menu.init_all();
    println!("initialised: {}", toggles.join(", "));
    log::info!("demo page ready with {} toggles", toggles.len());

    for step in SCRIPT {
        println!("> {}", describe(step));
        play(&mut menu, step);
        print_state(&menu);
    }

    ExitCode::SUCCESS
}
