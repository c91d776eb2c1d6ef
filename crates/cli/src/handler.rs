//! Error reporting for the `wave` binary.

use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt};
use waveportal::PortalError;

/// Reports errors as one line of causes, followed by a hint when a [`PortalError`] in the
/// chain has one.
///
/// With `WAVE_DEBUG` set, the verbose `color-eyre` report is used for `{:?}` instead.
#[derive(Default)]
pub struct Handler {
    verbose: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    /// Reports through `verbose` when it is set.
    pub fn new(verbose: Option<Box<dyn EyreHandler>>) -> Self {
        Self { verbose }
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&causes(error).join(": "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verbose {
            Some(verbose) => verbose.debug(error, f),
            None => f.write_str(&report(error)),
        }
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(verbose) = &mut self.verbose {
            verbose.track_caller(location);
        }
    }
}

/// Renders `error` the way the `wave` binary prints it.
pub fn report(error: &(dyn Error + 'static)) -> String {
    let mut out = causes(error).join(": ");
    if let Some(hint) = hint(error) {
        out.push_str("\n\nhint: ");
        out.push_str(hint);
    }
    out
}

/// The messages of `error` and its sources, skipping blank ones and any that only repeat
/// the message before them.
fn causes(error: &(dyn Error + 'static)) -> Vec<String> {
    eyre::Chain::new(error)
        .map(|cause| cause.to_string().trim().to_string())
        .filter(|message| !message.is_empty())
        .coalesce(|prev, next| if prev.contains(&next) { Ok(prev) } else { Err((prev, next)) })
        .collect()
}

/// The hint of the first portal error in the chain that has one.
fn hint(error: &(dyn Error + 'static)) -> Option<&'static str> {
    eyre::Chain::new(error)
        .filter_map(|cause| cause.downcast_ref::<PortalError>())
        .find_map(PortalError::hint)
}

/// Installs the `eyre` report hook and the `color-eyre` panic hook.
pub fn install() {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug in wave, please report it along with the output above.")
        .into_hooks();
    panic_hook.install();

    let eyre_hook = eyre_hook.into_eyre_hook();
    let verbose = std::env::var_os("WAVE_DEBUG").is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |error| {
        Box::new(Handler::new(verbose.then(|| eyre_hook(error))))
    })) {
        debug!(%err, "eyre hook is already installed");
    }
}
