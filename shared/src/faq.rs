/// Glyph shown next to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqIcon {
    Contract,
    DateReserve,
    CreditCard,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub icon: FaqIcon,
}

pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "Posso alterar o pacote depois de fechar o contrato?",
        answer: "Sim! O mais importante é garantir a data para não correr o risco de ficarmos sem disponibilidade. O pacote e a escolha dos drinks podem ser definidos até uma semana antes do evento, mantendo os valores do orçamento original.",
        icon: FaqIcon::Contract,
    },
    FaqEntry {
        question: "Como faço para reservar minha data?",
        answer: "É bem simples. Com uma entrada de apenas R$300,00, elaboramos o contrato e sua data fica garantida. O pagamento final é realizado somente na semana do evento.",
        icon: FaqIcon::DateReserve,
    },
    FaqEntry {
        question: "Quais são as formas de pagamento?",
        answer: "Aceitamos parcelamento no cartão de crédito (com repasse da taxa da máquina) ou pagamentos parcelados via PIX/transferência até a data do evento, com cada pagamento validado por comprovante.",
        icon: FaqIcon::CreditCard,
    },
    FaqEntry {
        question: "O que acontece se o número de convidados mudar?",
        answer: "Não se preocupe. O valor final é ajustado na semana do evento, após a confirmação do número de convidados, de forma proporcional ao valor combinado.",
        icon: FaqIcon::Users,
    },
    FaqEntry {
        question: "Como funciona a contagem de convidados?",
        answer: "Contabilizamos todos os convidados acima de 8 anos. Nossa proposta já considera a variação de consumo entre eles. Oferecemos um cardápio completo com drinks não alcoólicos para que todos possam aproveitar.",
        icon: FaqIcon::Users,
    },
];

/// Accordion with at most one entry open. The first entry starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    open_index: Option<usize>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self { open_index: Some(0) }
    }
}

impl FaqAccordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }

    /// Collapse `index` if it is open, otherwise make it the only open entry.
    pub fn toggle(&mut self, index: usize) {
        self.open_index = if self.is_open(index) { None } else { Some(index) };
    }
}
