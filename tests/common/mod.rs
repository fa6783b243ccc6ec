#![allow(dead_code)]

use peliculas_api::core::dataset::{parse_daily, parse_monthly};
use peliculas_api::{AppState, Dataset};
use std::path::Path;

pub const MONTHLY_CSV: &str = "\
Title,Month
Heat,January
Brazil,January
Ran,January
,January
Up,May
Alien,May
";

pub const DAILY_CSV: &str = "\
title,release_date,DAY_OF_WEEK
Jaws,1975-06-20,Friday
Alien,1979-05-25,Friday
Tron,1982-07-09,Friday
Heat,1995-12-15,Friday
Up,2009-05-29,Friday
Brazil,1985-02-20,Wednesday
Ran,1985-06-01,Saturday
Her,2013-12-18,Wednesday
Rocky,1976-12-03,Friday
Manhattan,1979-04-25,Wednesday
Amadeus,1984-09-19,Wednesday
Gandhi,1982-11-30,Tuesday
Metropolis,1927-01-10,Monday
Halloween,1978-10-25,Wednesday
Psycho,1960-09-08,Thursday
,1999-01-04,Monday
Seven,1995-09-22,Friday
Speed,1994-06-10,Friday
Big,1988-06-03,Friday
Ghost,1990-07-13,Friday
Fargo,1996-03-08,Friday
Lucy,2014-07-25,Friday
Rambo,2008-01-25,Friday
Volver,2006-03-17,Friday
Nope,2022-07-22,Friday
Arrival,2016-11-11,Friday
Blade Runner,1982-06-25,Friday
Tenet,2020-08-26,Wednesday
Elf,2003-11-07,Friday
Memento,2000-09-05,Tuesday
Monday Movie A,2001-01-01,Monday
Monday Movie B,2001-01-08,Monday
Monday Movie C,2001-01-15,Monday
";

pub fn sample_dataset() -> Dataset {
    let monthly = parse_monthly("mes.csv", MONTHLY_CSV.as_bytes()).unwrap();
    let daily = parse_daily("dia.csv", DAILY_CSV.as_bytes()).unwrap();
    Dataset::new(monthly, daily)
}

pub fn sample_state() -> AppState {
    AppState::new(sample_dataset(), None)
}

pub fn write_data_dir(dir: &Path, monthly: &str, daily: &str) {
    std::fs::write(dir.join("PeliculasPorMesListo.csv"), monthly).unwrap();
    std::fs::write(dir.join("PeliculasPorDiaListo.csv"), daily).unwrap();
}
