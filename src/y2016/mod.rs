// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day01;
pub(crate) mod day12;
pub(crate) mod day13;
pub(crate) mod day23;
pub(crate) mod day25;
