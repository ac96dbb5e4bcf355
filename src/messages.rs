// Textos visibles para el usuario (la app está en portugués)

pub const NO_ANSWER_SELECTED: &str = "⚠️ Selecione uma resposta antes de confirmar.";
pub const PHASE_LOCKED: &str =
    "Esta fase ainda está bloqueada. Complete as fases anteriores primeiro.";
pub const PHASE_NOT_FOUND: &str = "Fase não encontrada!";
pub const API_KEY_MISSING: &str =
    "⚠️ Chave de API não configurada. Algumas funcionalidades estarão limitadas.";
pub const WELCOME: &str = "👋 Bem-vindo ao Stuttz, sua jornada de aprendizado em Python!";

// Respuestas degradadas del servicio de texto
pub const AI_NOT_CONFIGURED: &str =
    "Não foi possível gerar uma resposta. A chave de API do Gemini não está configurada.";
pub const UNAVAILABLE_MARKER: &str = "não está configurada";

pub const TIP_FUNDAMENTOS: &str = "Pratique escrevendo pequenos programas Python todos os dias. Comece com scripts simples que usam print() e variáveis básicas.";
pub const TIP_ESTRUTURAS: &str = "Experimente criar diferentes tipos de listas e dicionários. Tente converter entre eles para entender suas diferenças e semelhanças.";
pub const TIP_GENERIC: &str = "Divida seu aprendizado em pequenas sessões diárias. Consistência é mais importante que sessões longas e esporádicas.";
pub const NEXT_STEPS_FALLBACK: &str = "Revise os tópicos atuais na documentação oficial do Python (docs.python.org) e pratique com pequenos exercícios diários.";

pub fn ai_error(err: impl std::fmt::Display) -> String {
    format!("Desculpe, não consegui gerar uma resposta. Erro: {err}")
}

pub fn level_up(level: u32) -> String {
    format!("🎉 Parabéns! Você alcançou o nível {level}!")
}

pub fn streak_continued(days: u32) -> String {
    format!("🔥 Sequência de {days} dias! Continue assim!")
}

pub fn quiz_correct(xp: u32) -> String {
    format!("✅ Resposta correta! Você ganhou {xp} XP!")
}

pub fn quiz_correct_again() -> String {
    "✅ Resposta correta! (XP desta fase já foi concedido)".to_string()
}

pub fn quiz_incorrect(correct: &str) -> String {
    format!("❌ Resposta incorreta. A resposta correta é: {correct}")
}

pub fn phase_unlocked(title: &str) -> String {
    format!("🔓 Nova fase desbloqueada: {title}!")
}

/// Dica estática por título de fase
pub fn static_study_tip(phase_title: &str) -> &'static str {
    match phase_title {
        "Fundamentos" => TIP_FUNDAMENTOS,
        "Estruturas de Dados" => TIP_ESTRUTURAS,
        _ => TIP_GENERIC,
    }
}
