//! Comprobador de disponibilidad
//!
//! Lógica pura de solapamiento de rangos de fechas y tarificación de una
//! reserva. No toca la base de datos: el controller le pasa las reservas
//! activas ya cargadas dentro de su transacción.
//!
//! Política de intervalos: CERRADA en ambos extremos. Una devolución el
//! día 15 bloquea una recogida el mismo día 15 (no hay rotación
//! mismo-día). Si negocio decide permitirla, el cambio es solo el `<=`
//! / `>=` de `ranges_overlap`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::booking::Booking;
use crate::utils::errors::AppError;

/// Test de solapamiento de intervalos cerrados [a_pickup, a_return] y
/// [b_pickup, b_return]
pub fn ranges_overlap(
    a_pickup: NaiveDate,
    a_return: NaiveDate,
    b_pickup: NaiveDate,
    b_return: NaiveDate,
) -> bool {
    a_pickup <= b_return && a_return >= b_pickup
}

/// Buscar la primera reserva existente que entra en conflicto con el rango
/// solicitado. Solo bloquean las reservas Pending/Confirmed; las
/// Cancelled/Completed nunca cuentan.
pub fn find_conflict<'a>(
    existing: &'a [Booking],
    pickup_date: NaiveDate,
    return_date: NaiveDate,
) -> Option<&'a Booking> {
    existing.iter().find(|b| {
        b.status.blocks_availability()
            && ranges_overlap(b.pickup_date, b.return_date, pickup_date, return_date)
    })
}

/// Validar el rango de fechas solicitado antes de tocar storage
///
/// Rechaza con InvalidArgument si `pickup >= return` o si la recogida
/// queda en el pasado respecto a `today`.
pub fn validate_date_range(
    today: NaiveDate,
    pickup_date: NaiveDate,
    return_date: NaiveDate,
) -> Result<(), AppError> {
    if pickup_date >= return_date {
        return Err(AppError::InvalidArgument(
            "La fecha de devolución debe ser posterior a la de recogida".to_string(),
        ));
    }
    if pickup_date < today {
        return Err(AppError::InvalidArgument(
            "La fecha de recogida no puede estar en el pasado".to_string(),
        ));
    }
    Ok(())
}

/// Número de días facturables de un rango válido
pub fn rental_days(pickup_date: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - pickup_date).num_days()
}

/// Importe total de la reserva: price_per_day * número de días
pub fn quote_total(
    price_per_day: Decimal,
    pickup_date: NaiveDate,
    return_date: NaiveDate,
) -> Decimal {
    price_per_day * Decimal::from(rental_days(pickup_date, return_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(pickup: &str, ret: &str, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            pickup_date: date(pickup),
            return_date: date(ret),
            pickup_location: "Madrid".to_string(),
            return_location: "Madrid".to_string(),
            total_amount: Decimal::new(100, 0),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_non_overlapping_ranges_do_not_conflict() {
        let existing = vec![booking("2025-01-01", "2025-01-05", BookingStatus::Pending)];
        assert!(find_conflict(&existing, date("2025-01-06"), date("2025-01-10")).is_none());
    }

    #[test]
    fn test_overlapping_ranges_conflict() {
        let existing = vec![booking("2025-01-01", "2025-01-05", BookingStatus::Confirmed)];
        assert!(find_conflict(&existing, date("2025-01-03"), date("2025-01-08")).is_some());
    }

    #[test]
    fn test_cancelled_booking_never_blocks() {
        let existing = vec![booking("2025-01-01", "2025-01-05", BookingStatus::Cancelled)];
        assert!(find_conflict(&existing, date("2025-01-01"), date("2025-01-05")).is_none());
    }

    #[test]
    fn test_completed_booking_never_blocks() {
        let existing = vec![booking("2025-01-01", "2025-01-05", BookingStatus::Completed)];
        assert!(find_conflict(&existing, date("2025-01-02"), date("2025-01-04")).is_none());
    }

    #[test]
    fn test_same_day_turnover_is_a_conflict() {
        // intervalo cerrado: devolución el 15 bloquea recogida el 15
        let existing = vec![booking("2025-03-10", "2025-03-15", BookingStatus::Confirmed)];
        assert!(find_conflict(&existing, date("2025-03-15"), date("2025-03-20")).is_some());
    }

    #[test]
    fn test_contained_range_conflicts() {
        let existing = vec![booking("2025-01-01", "2025-01-10", BookingStatus::Pending)];
        assert!(find_conflict(&existing, date("2025-01-03"), date("2025-01-05")).is_some());
    }

    #[test]
    fn test_validate_rejects_equal_dates() {
        let err = validate_date_range(date("2025-01-01"), date("2025-02-01"), date("2025-02-01"));
        assert!(matches!(err, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let err = validate_date_range(date("2025-01-01"), date("2025-02-05"), date("2025-02-01"));
        assert!(matches!(err, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_past_pickup() {
        let err = validate_date_range(date("2025-06-01"), date("2025-05-20"), date("2025-05-25"));
        assert!(matches!(err, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_accepts_pickup_today() {
        let today = date("2025-06-01");
        assert!(validate_date_range(today, today, date("2025-06-03")).is_ok());
    }

    #[test]
    fn test_quote_total() {
        // 2025-01-01 -> 2025-01-05 a 40/día = 4 días = 160
        let total = quote_total(Decimal::new(40, 0), date("2025-01-01"), date("2025-01-05"));
        assert_eq!(total, Decimal::new(160, 0));
    }

    #[test]
    fn test_rental_days_minimum_one() {
        assert_eq!(rental_days(date("2025-01-01"), date("2025-01-02")), 1);
    }
}
