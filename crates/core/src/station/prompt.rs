//! Console prompts that gather a station field by field.
//!
//! Every field is re-prompted until it is valid. Input is consumed line by
//! line: token reads take the first word of the next non-blank line and
//! discard the rest, so a bad entry never leaks into the next prompt.

use std::{
    fmt,
    io::{self, BufRead, Write},
    iter,
    str::FromStr,
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::{
    builder::{StationBuilder, MAX_QUANTITY},
    models::Station,
};
use crate::models::{CommDevice, DockingPortSize, OrbitalParameters, OrbitedBody};

const INVALID_RESPONSE: &str = "Invalid Response";
const INVALID_INTEGER: &str = "Invalid Response. Must be an integer.";
const INVALID_BODY: &str = "Invalid Response. Must be a valid planet or moon.";

/// Line-oriented input paired with the output prompts are written to.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the wrapped streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `text` without a newline and flush so it shows before input is read.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Read the next raw line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become `U+FFFD`. Fails with
    /// [`io::ErrorKind::UnexpectedEof`] once input is exhausted.
    pub fn read_line(&mut self, field: &str) -> io::Result<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed while reading {field}"),
            ));
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        if line.contains(char::REPLACEMENT_CHARACTER) {
            warn!(field, "input line is not valid UTF-8");
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// First whitespace-separated word of the next non-blank line.
    pub fn next_token(&mut self, field: &str) -> io::Result<String> {
        loop {
            let line = self.read_line(field)?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Prompt for a whole line until a non-blank, readable one is entered.
    pub fn read_non_empty(&mut self, prompt: &str, field: &str) -> io::Result<String> {
        loop {
            self.prompt(prompt)?;
            let line = self.read_line(field)?;
            let value = line.trim();
            if !value.is_empty() && !is_garbled(value) {
                return Ok(value.to_string());
            }
            self.say(INVALID_RESPONSE)?;
        }
    }

    /// Prompt until the next token parses as `T`.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str, field: &str) -> io::Result<T> {
        loop {
            self.prompt(prompt)?;
            let token = self.next_token(field)?;
            match token.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    warn!(field, input = %token, "rejected non-integer input");
                    self.say(INVALID_INTEGER)?;
                }
            }
        }
    }

    /// Prompt for a yes/no answer; only the first character counts.
    pub fn read_yes_no(&mut self, prompt: &str, field: &str) -> io::Result<bool> {
        loop {
            self.prompt(prompt)?;
            let token = self.next_token(field)?;
            match first_char_lowercase(&token) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => self.say(INVALID_RESPONSE)?,
            }
        }
    }

    fn read_orbited_body(&mut self) -> io::Result<OrbitedBody> {
        loop {
            self.prompt("Station is Orbiting: ")?;
            let line = self.read_line("orbited body")?;
            if let Some(body) = OrbitedBody::from_name(line.trim()) {
                return Ok(body);
            }
            warn!(input = %line, "unknown orbited body");
            self.say(INVALID_BODY)?;
        }
    }

    /// Repeated lettered menu; each pick is followed by a quantity.
    ///
    /// The letter after the last option ends the loop.
    fn read_item_list<T: Copy + fmt::Display>(
        &mut self,
        heading: &str,
        options: &[(T, &str)],
        quantity_prompt: &str,
    ) -> io::Result<Vec<T>> {
        let done = menu_letter(options.len());
        let mut items = Vec::new();

        loop {
            self.say(heading)?;
            self.say("")?;
            for (index, (_, label)) in options.iter().enumerate() {
                self.say(format_args!("{}) {label}", menu_letter(index)))?;
            }
            self.say(format_args!("{done}) done"))?;
            self.say("")?;
            self.prompt("Enter Selection: ")?;

            let token = self.next_token("menu selection")?;
            let Some(selection) = first_char_lowercase(&token) else {
                continue;
            };
            if selection == done {
                break;
            }
            let Some(item) = menu_index(selection)
                .and_then(|index| options.get(index))
                .map(|(item, _)| *item)
            else {
                warn!(%selection, "unknown menu selection");
                self.say(INVALID_RESPONSE)?;
                continue;
            };

            let quantity = self.read_quantity(quantity_prompt)?;
            items.extend(iter::repeat(item).take(quantity));
        }

        for item in &items {
            self.say(item)?;
        }
        Ok(items)
    }

    /// Prompt for a unit count no larger than [`MAX_QUANTITY`].
    fn read_quantity(&mut self, prompt: &str) -> io::Result<usize> {
        loop {
            let quantity: u64 = self.read_number(prompt, "quantity")?;
            match usize::try_from(quantity) {
                Ok(quantity) if quantity <= MAX_QUANTITY => return Ok(quantity),
                _ => {
                    warn!(quantity, max = MAX_QUANTITY, "rejected quantity");
                    self.say(format_args!(
                        "{INVALID_RESPONSE}. Must be at most {MAX_QUANTITY}."
                    ))?;
                }
            }
        }
    }

    fn read_kerbals(&mut self) -> io::Result<Vec<String>> {
        let mut kerbals = Vec::new();
        loop {
            self.say("Enter Kerbals Currently On-Board. Leave blank when finished.")?;
            self.prompt("Enter Kerbal Name: ")?;
            let line = self.read_line("kerbal name")?;
            let name = line.trim();
            if name.is_empty() {
                return Ok(kerbals);
            }
            if is_garbled(name) {
                self.say(INVALID_RESPONSE)?;
                continue;
            }
            kerbals.push(name.to_string());
        }
    }

    /// Walk the operator through every station field and build the result.
    pub fn collect_station(&mut self) -> Result<Station> {
        let id = self.read_non_empty("Enter Station ID: ", "station id")?;
        let name = self.read_non_empty("Enter Station Name: ", "station name")?;
        let capacity: u64 =
            self.read_number("Enter Station Kerbal Capacity: ", "capacity")?;
        let active = self.read_yes_no("Is station currently active? (y or n): ", "active flag")?;

        let apoapsis: u64 = self.read_number("Enter Station Apoapsis: ", "apoapsis")?;
        let periapsis: u64 = self.read_number("Enter Station Periapsis: ", "periapsis")?;
        self.say(format_args!("AP: {apoapsis}"))?;
        self.say(format_args!("PE: {periapsis}"))?;

        let orbiting = self.read_orbited_body()?;

        let port_options: Vec<_> = DockingPortSize::ALL
            .iter()
            .map(|size| (*size, size.menu_label()))
            .collect();
        let docking_ports = self.read_item_list(
            "Enter Station Docking Ports",
            &port_options,
            "Enter quantity of selected docking port: ",
        )?;

        let device_options: Vec<_> = CommDevice::ALL
            .iter()
            .map(|device| (*device, device.name()))
            .collect();
        let comms_devices = self.read_item_list(
            "Enter Communication Devices",
            &device_options,
            "Enter Quantity of Selected Communication Device: ",
        )?;

        let kerbals = self.read_kerbals()?;

        debug!(
            station_id = %id,
            docking_ports = docking_ports.len(),
            comms_devices = comms_devices.len(),
            kerbals = kerbals.len(),
            "collected station fields"
        );

        let station = StationBuilder::new(id)
            .context("station id rejected")?
            .set_name(name)
            .set_capacity(capacity)
            .set_active(active)
            .set_orbit(OrbitalParameters::new(apoapsis, periapsis))
            .set_orbiting_body(orbiting)
            .set_comms_devices(comms_devices)
            .set_docking_ports(docking_ports)
            .set_kerbals(kerbals)
            .build();
        Ok(station)
    }
}

/// Gather one station from `input`, writing prompts to `output`.
pub fn collect_station<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Station> {
    Console::new(input, output).collect_station()
}

/// Whether a line carried bytes that were not valid UTF-8.
fn is_garbled(text: &str) -> bool {
    text.contains(char::REPLACEMENT_CHARACTER)
}

fn first_char_lowercase(token: &str) -> Option<char> {
    token.chars().next().map(|ch| ch.to_ascii_lowercase())
}

fn menu_letter(index: usize) -> char {
    char::from(b'a' + index as u8)
}

fn menu_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| letter as usize - 'a' as usize)
}
