//! Общие типы портала предприятия: агрегаты, справочники статусов,
//! состояние приложения и демонстрационные данные.

pub mod domain;
pub mod enums;
pub mod shared;
