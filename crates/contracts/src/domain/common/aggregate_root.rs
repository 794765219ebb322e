/// Общий интерфейс записей портала (курсы, вакансии).
///
/// Статические имена используются экранами для заголовков списков и
/// для идентификаторов страниц вида `{full_name}--{category}`.
pub trait AggregateRoot {
    /// Номер агрегата, "a001"
    fn aggregate_index() -> &'static str;

    /// "training_course"
    fn collection_name() -> &'static str;

    /// Заголовок списка записей
    fn list_name() -> &'static str;

    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
