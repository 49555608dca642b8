// Copyright (c) 2022 Bastiaan Marinus van de Weerd

pub(crate) mod day04;
pub(crate) mod day13;
pub(crate) mod day17;
