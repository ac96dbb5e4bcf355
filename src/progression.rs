//! Reglas de progresión: XP, subida de nivel, desbloqueo de fases y racha.
//!
//! Son funciones puras sobre el modelo; persistir es cosa de quien las llama.

use crate::config::{XP_PER_CORRECT_ANSWER, XP_PER_LEVEL};
use crate::model::{Phase, PhaseStatus, Roadmap, UserProgress};
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XpAward {
    pub xp_gained: u32,
    pub new_level: Option<u32>,
}

/// Concede XP por la primera respuesta correcta de la fase.
///
/// Devuelve `None` si el quiz ya estaba completado. Resuelve como mucho una
/// subida de nivel por llamada; el excedente pasa al nivel siguiente.
pub fn award_xp_for_correct_answer(user: &mut UserProgress, phase: &mut Phase) -> Option<XpAward> {
    if phase.quiz_completed {
        return None;
    }
    phase.quiz_completed = true;
    user.completed_phase_ids.insert(phase.id);

    // Los valores vienen de un fichero editable: saturar, nunca desbordar
    user.xp = user.xp.saturating_add(XP_PER_CORRECT_ANSWER);
    let mut new_level = None;
    if user.xp >= user.xp_to_next {
        user.level = user.level.saturating_add(1);
        let excess = user.xp - user.xp_to_next;
        user.xp_to_next = XP_PER_LEVEL.saturating_mul(user.level);
        user.xp = excess;
        new_level = Some(user.level);
    }

    Some(XpAward {
        xp_gained: XP_PER_CORRECT_ANSWER,
        new_level,
    })
}

/// Marca la fase como completada y desbloquea la siguiente si estaba bloqueada.
///
/// Devuelve la fase desbloqueada (id, título), si la hay.
pub fn check_and_unlock_next_phase(roadmap: &mut Roadmap, phase_id: u32) -> Option<(u32, String)> {
    let pos = roadmap.position_of(phase_id)?;
    roadmap.phases[pos].status = PhaseStatus::Completed;

    let next = roadmap.phases.get_mut(pos + 1)?;
    if next.status == PhaseStatus::Locked {
        next.status = PhaseStatus::Unlocked;
        Some((next.id, next.title.clone()))
    } else {
        None
    }
}

/// Actualiza la racha de días consecutivos. Devuelve `true` si aumentó.
pub fn update_streak(user: &mut UserProgress, today: NaiveDate) -> bool {
    let last = user.last_activity.replace(today);

    let Some(last) = last else {
        user.streak = 1;
        return true;
    };

    match (today - last).num_days() {
        0 => false,
        1 => {
            user.streak = user.streak.saturating_add(1);
            true
        }
        // Huecos de más de un día o reloj hacia atrás
        _ => {
            user.streak = 1;
            false
        }
    }
}
